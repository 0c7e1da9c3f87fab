//! Integration tests for schemakind-core.

use schemakind_core::{
    Resolution, SchemaKind, TypeClassifier, TypeDescriptor, TypeResolver, TypeShape, TypeTable,
};

#[test]
fn jdk_table_classifications() {
    let table = TypeTable::jdk();
    let classifier = TypeClassifier::new(&table);

    let output = table
        .iter()
        .map(|info| format!("{} {}", info.descriptor, classifier.classify(&info.descriptor)))
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(output, @r"
    Ljava/io/File; string
    Ljava/lang/Character; object
    Ljava/lang/Object; object
    Ljava/lang/StringBuilder; string
    Ljava/net/URI; string
    Ljava/net/URL; string
    Ljava/time/DayOfWeek; string
    Ljava/time/Duration; object
    Ljava/time/LocalDate; object
    Ljava/util/ArrayList; object
    Ljava/util/Currency; object
    Ljava/util/Date; string
    Ljava/util/List; object
    Ljava/util/Locale; string
    Ljava/util/Map; object
    Ljava/util/Optional; object
    Ljava/util/UUID; string
    Ljava/util/concurrent/TimeUnit; string
    ");
}

#[test]
fn table_from_toml_drives_classification() {
    let table = TypeTable::from_toml_str(
        r#"
        [[types]]
        descriptor = "Lcom/example/OrderId;"
        constructors = [{ params = ["Ljava/lang/String;"] }]

        [[types]]
        descriptor = "Lcom/example/Color;"
        enum = true

        [[types]]
        descriptor = "Lcom/example/Money;"
        methods = [{ name = "fromString", params = ["Ljava/lang/String;"], static = true }]

        [[types]]
        descriptor = "Lcom/example/Order;"
        constructors = [{ params = [] }]
        methods = [{ name = "valueOf", params = ["Ljava/lang/String;"] }]
        "#,
    )
    .unwrap();
    let classifier = TypeClassifier::new(&table);

    let descriptors: Vec<TypeDescriptor> = [
        "Lcom/example/OrderId;",
        "Lcom/example/Color;",
        "Lcom/example/Money;",
        "Lcom/example/Order;",
        "Lcom/example/Missing;",
    ]
    .into_iter()
    .map(Into::into)
    .collect();

    let json: Vec<_> = classifier
        .classify_all(&descriptors)
        .into_iter()
        .map(|(d, kind)| serde_json::json!({ "descriptor": d, "type": kind }))
        .collect();

    insta::assert_json_snapshot!(json, @r#"
    [
      {
        "descriptor": "Lcom/example/OrderId;",
        "type": "string"
      },
      {
        "descriptor": "Lcom/example/Color;",
        "type": "string"
      },
      {
        "descriptor": "Lcom/example/Money;",
        "type": "string"
      },
      {
        "descriptor": "Lcom/example/Order;",
        "type": "object"
      },
      {
        "descriptor": "Lcom/example/Missing;",
        "type": "object"
      }
    ]
    "#);
}

/// Shape backed by flags, to exercise the classifier through its traits alone.
struct Flags {
    is_enum: bool,
    string_ctor: bool,
    factories: &'static [&'static str],
}

impl TypeShape for Flags {
    fn is_enum(&self) -> bool {
        self.is_enum
    }

    fn has_string_constructor(&self, _string: &str) -> bool {
        self.string_ctor
    }

    fn has_static_string_factory(&self, name: &str, _string: &str) -> bool {
        self.factories.contains(&name)
    }
}

struct FlagsResolver;

impl TypeResolver for FlagsResolver {
    type Type = Flags;

    fn resolve(&self, descriptor: &TypeDescriptor) -> Resolution<Flags> {
        let flags = match descriptor.as_str() {
            "LEnum;" => Flags {
                is_enum: true,
                string_ctor: true,
                factories: &[],
            },
            "LCtor;" => Flags {
                is_enum: false,
                string_ctor: true,
                factories: &[],
            },
            "LFactory;" => Flags {
                is_enum: false,
                string_ctor: false,
                factories: &["fromString"],
            },
            "LPlain;" => Flags {
                is_enum: false,
                string_ctor: false,
                factories: &["parse"],
            },
            _ => return Resolution::Unresolved,
        };
        Resolution::Resolved(flags)
    }
}

#[test]
fn custom_resolver() {
    let classifier = TypeClassifier::new(FlagsResolver);
    let cases = [
        ("LEnum;", SchemaKind::String),
        ("LCtor;", SchemaKind::String),
        ("LFactory;", SchemaKind::String),
        ("LPlain;", SchemaKind::Object),
        ("LGone;", SchemaKind::Object),
        ("Ljava/lang/String;", SchemaKind::String),
    ];
    for (descriptor, expected) in cases {
        assert_eq!(
            classifier.classify(&descriptor.into()),
            expected,
            "{}",
            descriptor
        );
    }
}

#[test]
fn resolution_helpers() {
    let resolved: Resolution<u8> = Some(3).into();
    assert!(resolved.is_resolved());
    assert_eq!(resolved.map(|n| n * 2).into_option(), Some(6));

    let unresolved: Resolution<u8> = None.into();
    assert!(!unresolved.is_resolved());
    assert_eq!(unresolved.into_option(), None);
}

#[test]
fn classifier_is_shareable_across_threads() {
    let table = TypeTable::jdk();
    let classifier = TypeClassifier::new(&table);
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                assert_eq!(
                    classifier.classify(&"Ljava/util/UUID;".into()),
                    SchemaKind::String
                );
            });
        }
    });
}
