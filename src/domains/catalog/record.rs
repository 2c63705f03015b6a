//! Icon record type.

use serde::Serialize;

/// A resolved `(library, symbol)` pair.
///
/// `full_name` is derived from the other two fields when the record is
/// built and cannot be set on its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconRecord {
    package_name: String,
    icon_name: String,
    full_name: String,
}

impl IconRecord {
    /// Build a record for `icon_name` in the library `package_name`.
    pub fn new(package_name: impl Into<String>, icon_name: impl Into<String>) -> Self {
        let package_name = package_name.into();
        let icon_name = icon_name.into();
        let full_name = format!("{}/{}", package_name, icon_name);

        Self {
            package_name,
            icon_name,
            full_name,
        }
    }

    /// Prefix of the owning library.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Exact exported symbol name, e.g. `FaUser`.
    pub fn icon_name(&self) -> &str {
        &self.icon_name
    }

    /// Display key, `"{package_name}/{icon_name}"`.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_is_derived() {
        let record = IconRecord::new("fa", "FaUser");
        assert_eq!(record.package_name(), "fa");
        assert_eq!(record.icon_name(), "FaUser");
        assert_eq!(record.full_name(), "fa/FaUser");
    }

    #[test]
    fn test_serializes_camel_case() {
        let record = IconRecord::new("md", "MdHome");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "packageName": "md",
                "iconName": "MdHome",
                "fullName": "md/MdHome"
            })
        );
    }
}
