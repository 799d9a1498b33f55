use std::iter;

use schema::{EnumSchema, MessageSchema};

use crate::naming::oneof_case_name;
use crate::printer::Printer;

pub fn print_enum(en: &EnumSchema, indent_level: usize) -> String {
    print_enum_decl(
        &en.name,
        en.values.iter().map(|v| (v.name.to_uppercase(), v.number)),
        indent_level,
    )
}

/// Case enum of the oneof at `index`: `<NAME>_NOT_SET = 0`, then one entry per member field.
pub fn print_oneof_case(message: &MessageSchema, index: usize, indent_level: usize) -> String {
    let Some(oneof) = message.oneofs.get(index) else {
        return String::new();
    };
    let not_set = (format!("{}_NOT_SET", oneof.name.to_uppercase()), 0);
    let members = message
        .oneof_fields(index)
        .map(|f| (f.name.to_uppercase(), f.number));

    print_enum_decl(
        &oneof_case_name(oneof),
        iter::once(not_set).chain(members),
        indent_level,
    )
}

fn print_enum_decl(
    name: &str,
    values: impl IntoIterator<Item = (String, i32)>,
    indent_level: usize,
) -> String {
    let mut printer = Printer::new(indent_level);
    printer.print_ln(&format!("export enum {name} {{"));
    for (value_name, number) in values {
        printer.print_indented_ln(&format!("{value_name} = {number},"));
    }
    printer.print_ln("}");
    printer.into_output()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schema::{FieldSchema, ScalarType};

    #[test]
    fn keeps_declaration_order_and_uppercases() {
        let en = EnumSchema::new("Status")
            .with_value("shipped", 2)
            .with_value("New", 0)
            .with_value("PAID", 1);
        assert_eq!(
            print_enum(&en, 1),
            "  export enum Status {\n    SHIPPED = 2,\n    NEW = 0,\n    PAID = 1,\n  }\n"
        );
    }

    #[test]
    fn oneof_case_enum_has_not_set_sentinel_and_field_numbers() {
        let message = MessageSchema::new("U")
            .with_field(FieldSchema::scalar("a", 1, ScalarType::Int32).in_oneof(0))
            .with_field(FieldSchema::scalar("plain", 3, ScalarType::Int32))
            .with_field(FieldSchema::scalar("b", 7, ScalarType::String).in_oneof(0))
            .with_oneof("choice");
        assert_eq!(
            print_oneof_case(&message, 0, 0),
            "export enum ChoiceCase {\n  CHOICE_NOT_SET = 0,\n  A = 1,\n  B = 7,\n}\n"
        );
    }

    #[test]
    fn oneof_case_enums_only_list_their_own_members() {
        let message = MessageSchema::new("Pair")
            .with_field(FieldSchema::scalar("left_a", 1, ScalarType::Int32).in_oneof(0))
            .with_field(FieldSchema::scalar("right_a", 2, ScalarType::Int32).in_oneof(1))
            .with_field(FieldSchema::scalar("right_b", 3, ScalarType::Int32).in_oneof(1))
            .with_oneof("left")
            .with_oneof("right");
        let right = print_oneof_case(&message, 1, 0);
        assert_eq!(right.lines().count(), 5);
        assert!(right.contains("RIGHT_NOT_SET = 0,"));
        assert!(!right.contains("LEFT_A"));
    }
}
