use std::collections::HashMap;

use schema::{
    EnumSchema, ExportMap, FieldSchema, FieldType, FileSchema, MessageSchema, ScalarType, Syntax,
};
use tsd_generator::{GeneratorOptions, generate_declarations};

fn common_file() -> FileSchema {
    FileSchema::new("common/money.proto", Syntax::Proto3)
        .with_package("com.example.common")
        .with_message(
            MessageSchema::new("Money")
                .with_field(FieldSchema::scalar("currency_code", 1, ScalarType::String))
                .with_field(FieldSchema::scalar("units", 2, ScalarType::Int64)),
        )
        .with_enum(
            EnumSchema::new("Currency")
                .with_value("UNKNOWN", 0)
                .with_value("EUR", 1),
        )
}

fn shop_file() -> FileSchema {
    FileSchema::new("shop/order.proto", Syntax::Proto3)
        .with_package("com.example.shop")
        .with_dependency("common/money.proto")
        .with_dependency("google/protobuf/timestamp.proto")
        .with_message(
            MessageSchema::new("Order")
                .with_field(FieldSchema::scalar("id", 1, ScalarType::String))
                .with_field(FieldSchema::message("total", 2, "com.example.common.Money"))
                .with_field(
                    FieldSchema::message("line_items", 3, "com.example.shop.LineItem").repeated(),
                )
                .with_field(FieldSchema::enumeration(
                    "status",
                    4,
                    "com.example.shop.Order.Status",
                ))
                .with_field(
                    FieldSchema::message("attributes", 5, "com.example.shop.Order.AttributesEntry")
                        .repeated(),
                )
                .with_field(FieldSchema::scalar("card_token", 6, ScalarType::Bytes).in_oneof(0))
                .with_field(FieldSchema::scalar("voucher_code", 7, ScalarType::String).in_oneof(0))
                .with_field(FieldSchema::message(
                    "created_at",
                    8,
                    "google.protobuf.Timestamp",
                ))
                .with_oneof("payment")
                .with_nested_message(MessageSchema::map_entry(
                    "AttributesEntry",
                    FieldType::Scalar(ScalarType::String),
                    FieldType::Message("com.example.common.Money".to_string()),
                ))
                .with_nested_enum(
                    EnumSchema::new("Status")
                        .with_value("PENDING", 0)
                        .with_value("shipped", 2)
                        .with_value("PAID", 1),
                ),
        )
        .with_message(
            MessageSchema::new("LineItem")
                .with_field(FieldSchema::scalar("sku", 1, ScalarType::String))
                .with_field(FieldSchema::scalar("quantity", 2, ScalarType::Uint32))
                .with_field(FieldSchema::enumeration(
                    "currency",
                    3,
                    "com.example.common.Currency",
                )),
        )
}

fn timestamp_file() -> FileSchema {
    FileSchema::new("google/protobuf/timestamp.proto", Syntax::Proto3)
        .with_package("google.protobuf")
        .with_message(MessageSchema::new("Timestamp"))
}

#[test]
fn e2e_generate_cross_file_declarations() {
    let common = common_file();
    let shop = shop_file();
    let timestamp = timestamp_file();
    let export_map = ExportMap::from_files([&common, &shop, &timestamp]);

    let files = generate_declarations([&shop, &common], &export_map, &GeneratorOptions::default())
        .expect("generation should succeed");
    let map: HashMap<String, String> = files.into_iter().collect();
    assert_eq!(map.len(), 2, "unexpected extra files generated");

    let order = map.get("shop/order_pb.d.ts").expect("missing shop/order_pb.d.ts");

    // header & imports
    assert!(order.starts_with(
        "// package: com.example.shop\n// file: shop/order.proto\n\nimport * as jspb from \"google-protobuf\";\n"
    ));
    assert!(order.contains("import * as common_money_pb from \"../common/money_pb\";\n"));
    assert!(order.contains(
        "import * as google_protobuf_timestamp_pb from \"google-protobuf/google/protobuf/timestamp_pb\";\n"
    ));

    // cross-file and same-file references
    assert!(order.contains("  getTotal(): common_money_pb.Money | undefined;\n"));
    assert!(order.contains("    total?: common_money_pb.Money.AsObject,\n"));
    assert!(order.contains("  getLineItemsList(): Array<LineItem>;\n"));
    assert!(order.contains("  getStatus(): Order.Status;\n"));
    assert!(order.contains("  getCurrency(): common_money_pb.Currency;\n"));
    assert!(order.contains(
        "  getCreatedAt(): google_protobuf_timestamp_pb.Timestamp | undefined;\n"
    ));

    // proto3 scalars have no presence accessors
    assert!(!order.contains("hasId()"));
    assert!(!order.contains("hasStatus()"));

    // map of messages
    assert!(order.contains(
        "  getAttributesMap(): jspb.Map<string, common_money_pb.Money>;\n"
    ));
    assert!(order.contains(
        "    attributesMap: Array<[string, common_money_pb.Money.AsObject]>,\n"
    ));
    assert!(!order.contains("export class AttributesEntry"));

    // oneof with a bytes member
    assert!(order.contains("  hasCardToken(): boolean;\n"));
    assert!(order.contains("  getCardToken_asB64(): string;\n"));
    assert!(order.contains("  getPaymentCase(): Order.PaymentCase;\n"));
    assert!(order.contains(
        "  export enum PaymentCase {\n    PAYMENT_NOT_SET = 0,\n    CARD_TOKEN = 6,\n    VOUCHER_CODE = 7,\n  }\n"
    ));

    // nested enum keeps declaration order
    assert!(order.contains(
        "  export enum Status {\n    PENDING = 0,\n    SHIPPED = 2,\n    PAID = 1,\n  }\n"
    ));

    // top-level messages follow each other in declaration order
    let order_class = order.find("export class Order extends").unwrap();
    let item_class = order.find("export class LineItem extends").unwrap();
    assert!(order_class < item_class);
    assert!(order.ends_with("}\n\n"));

    let money = map.get("common/money_pb.d.ts").expect("missing common/money_pb.d.ts");
    assert!(money.contains("  getUnits(): number;\n"));
    assert!(money.contains("\nexport enum Currency {\n  UNKNOWN = 0,\n  EUR = 1,\n}\n"));
    assert!(!money.contains("import * as common_money_pb"));
}
