use schema::ScalarType;

/// Every bytes accessor accepts either raw bytes or base64 text.
pub const BYTES_DUAL_TYPE: &str = "Uint8Array | string";

/// TypeScript type exposed by the `google-protobuf` runtime for a scalar.
/// 64-bit integers are read back as plain numbers.
pub fn scalar_type_name(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::Double
        | ScalarType::Float
        | ScalarType::Int32
        | ScalarType::Int64
        | ScalarType::Uint32
        | ScalarType::Uint64
        | ScalarType::Sint32
        | ScalarType::Sint64
        | ScalarType::Fixed32
        | ScalarType::Fixed64
        | ScalarType::Sfixed32
        | ScalarType::Sfixed64 => "number",
        ScalarType::Bool => "boolean",
        ScalarType::String => "string",
        ScalarType::Bytes => "Uint8Array",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ScalarType::Double, "number")]
    #[case(ScalarType::Float, "number")]
    #[case(ScalarType::Int32, "number")]
    #[case(ScalarType::Int64, "number")]
    #[case(ScalarType::Uint32, "number")]
    #[case(ScalarType::Uint64, "number")]
    #[case(ScalarType::Sint32, "number")]
    #[case(ScalarType::Sint64, "number")]
    #[case(ScalarType::Fixed32, "number")]
    #[case(ScalarType::Fixed64, "number")]
    #[case(ScalarType::Sfixed32, "number")]
    #[case(ScalarType::Sfixed64, "number")]
    #[case(ScalarType::Bool, "boolean")]
    #[case(ScalarType::String, "string")]
    #[case(ScalarType::Bytes, "Uint8Array")]
    fn maps_every_scalar(#[case] scalar: ScalarType, #[case] expected: &str) {
        assert_eq!(scalar_type_name(scalar), expected);
    }
}
