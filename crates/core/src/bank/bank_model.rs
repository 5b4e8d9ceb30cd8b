use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Login and account details for the bank, loaded once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub account_no: String,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        account_no: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            account_no: account_no.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("account_no", &self.account_no)
            .finish()
    }
}

/// A raw transaction record as returned by the bank, keyed by the bank's
/// camelCase attribute names. Any attribute may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BankRecord(Map<String, Value>);

impl BankRecord {
    /// Tolerant attribute lookup. Absent and `null` attributes yield `None`;
    /// non-string values are rendered as their JSON text.
    pub fn attr(&self, name: &str) -> Option<String> {
        match self.0.get(name)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for BankRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Response of a transaction history request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionHistory {
    #[serde(default)]
    pub transaction_history_list: Option<Vec<BankRecord>>,
}

impl TransactionHistory {
    pub fn new(records: Vec<BankRecord>) -> Self {
        Self {
            transaction_history_list: Some(records),
        }
    }

    /// Records in the response; a missing list reads as empty.
    pub fn records(&self) -> &[BankRecord] {
        self.transaction_history_list.as_deref().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}
