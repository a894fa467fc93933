use alloy_primitives::Bytes;
use serde::{Deserialize, Serialize};

/// Vector that must succeed with the given output and gas.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SuccessVector {
    /// Precompile input.
    pub input: Bytes,
    /// Expected output.
    pub expected: Bytes,
    /// Expected gas.
    pub gas: u64,
    /// Vector name.
    pub name: String,
    /// Excludes the vector from throughput runs.
    #[serde(default)]
    pub no_benchmark: bool,
}

/// Vector that must be rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FailureVector {
    /// Precompile input.
    pub input: Bytes,
    /// Human readable reason. Informational only, not compared.
    pub expected_error: String,
    /// Vector name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_success() {
        let json = r#"[{"Input":"0011","Expected":"ff","Gas":600,"Name":"add"}]"#;
        let vectors: Vec<SuccessVector> = serde_json::from_str(json).unwrap();
        assert_eq!(
            vectors,
            [SuccessVector {
                input: Bytes::from_static(&[0x00, 0x11]),
                expected: Bytes::from_static(&[0xff]),
                gas: 600,
                name: "add".to_string(),
                no_benchmark: false,
            }]
        );
    }

    #[test]
    fn deserialize_failure() {
        let json = r#"{"Input":"","ExpectedError":"empty input","Name":"empty"}"#;
        let vector: FailureVector = serde_json::from_str(json).unwrap();
        assert!(vector.input.is_empty());
        assert_eq!(vector.expected_error, "empty input");
    }
}
