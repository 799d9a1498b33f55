use heck::{ToLowerCamelCase, ToUpperCamelCase};

use schema::{FieldSchema, OneofSchema};

/// `shipping_address` -> `shippingAddress`
pub fn field_camel_case(field: &FieldSchema) -> String {
    field.name.to_lowercase().to_lower_camel_case()
}

/// `shipping_address` -> `ShippingAddress`
pub fn field_pascal_case(field: &FieldSchema) -> String {
    field.name.to_lowercase().to_upper_camel_case()
}

pub fn oneof_case_name(oneof: &OneofSchema) -> String {
    format!("{}Case", oneof.name.to_upper_camel_case())
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema::ScalarType;

    #[test]
    fn converts_snake_case_field_names() {
        let f = FieldSchema::scalar("shipping_address", 1, ScalarType::String);
        assert_eq!(field_camel_case(&f), "shippingAddress");
        assert_eq!(field_pascal_case(&f), "ShippingAddress");
    }

    #[test]
    fn lowercases_before_converting() {
        let f = FieldSchema::scalar("ID", 1, ScalarType::String);
        assert_eq!(field_camel_case(&f), "id");
        assert_eq!(field_pascal_case(&f), "Id");
    }

    #[test]
    fn names_oneof_case_enum() {
        let oneof = OneofSchema {
            name: "payment_method".to_string(),
        };
        assert_eq!(oneof_case_name(&oneof), "PaymentMethodCase");
    }
}
