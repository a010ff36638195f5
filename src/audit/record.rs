//! Per-module audit rows.

use serde::Serialize;

/// Pass/fail verdict for one module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "ERROR")]
    Error,
}

impl Status {
    /// Text shown in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Error => "ERROR",
        }
    }

    /// Check if this is an error verdict.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Version comparison result for one module.
///
/// `data_version` is `None` when the data check was disabled; the
/// rendering side drops the column in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleVersionRecord {
    pub module: String,
    pub declared_version: String,
    pub schema_version: String,
    pub data_version: Option<String>,
    pub status: Status,
}

impl ModuleVersionRecord {
    /// Build a record and decide its status.
    ///
    /// OK iff the schema version equals the declared version and, when
    /// present, the data version does too. Plain string equality.
    pub fn evaluate(
        module: impl Into<String>,
        declared_version: impl Into<String>,
        schema_version: impl Into<String>,
        data_version: Option<String>,
    ) -> Self {
        let declared_version = declared_version.into();
        let schema_version = schema_version.into();

        let schema_ok = schema_version == declared_version;
        let data_ok = data_version
            .as_ref()
            .map_or(true, |data| *data == declared_version);

        let status = if schema_ok && data_ok {
            Status::Ok
        } else {
            Status::Error
        };

        Self {
            module: module.into(),
            declared_version,
            schema_version,
            data_version,
            status,
        }
    }
}
