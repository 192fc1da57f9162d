// The fixed catalog of definitions the theme depends on. Theme sections
// reference these by type and namespace+key, so changing a key here requires
// a matching change in the Liquid templates.

/// Namespace for all theme-owned product metafields.
pub const METAFIELD_NAMESPACE: &str = "qf";

/// Primitive content types we provision, mapped to Admin API type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    SingleLineText,
    MultiLineText,
    FileReference,
    Url,
    Integer,
    Decimal,
    TextList,
}

impl FieldType {
    pub fn api_name(self) -> &'static str {
        match self {
            FieldType::SingleLineText => "single_line_text_field",
            FieldType::MultiLineText => "multi_line_text_field",
            FieldType::FileReference => "file_reference",
            FieldType::Url => "url",
            FieldType::Integer => "number_integer",
            FieldType::Decimal => "number_decimal",
            FieldType::TextList => "list.single_line_text_field",
        }
    }
}

/// Resource category a metafield attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerType {
    Product,
}

impl OwnerType {
    pub fn api_name(self) -> &'static str {
        match self {
            OwnerType::Product => "PRODUCT",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub field_type: FieldType,
    pub required: bool,
}

#[derive(Debug, Clone)]
pub struct MetaobjectSpec {
    pub object_type: &'static str,
    pub name: &'static str,
    pub fields: Vec<FieldSpec>,
}

#[derive(Debug, Clone)]
pub struct MetafieldSpec {
    pub namespace: &'static str,
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub field_type: FieldType,
    pub owner: OwnerType,
}

pub fn metaobjects() -> Vec<MetaobjectSpec> {
    vec![
        MetaobjectSpec {
            object_type: "badge",
            name: "Badge",
            fields: vec![
                FieldSpec {
                    key: "label",
                    name: "Label",
                    description: "Short text shown on the badge",
                    field_type: FieldType::SingleLineText,
                    required: true,
                },
                FieldSpec {
                    key: "icon",
                    name: "Icon",
                    description: "Optional icon displayed next to the label",
                    field_type: FieldType::FileReference,
                    required: false,
                },
                FieldSpec {
                    key: "link",
                    name: "Link",
                    description: "Where the badge points when clicked",
                    field_type: FieldType::Url,
                    required: false,
                },
            ],
        },
        MetaobjectSpec {
            object_type: "testimonial",
            name: "Testimonial",
            fields: vec![
                FieldSpec {
                    key: "quote",
                    name: "Quote",
                    description: "The testimonial text",
                    field_type: FieldType::MultiLineText,
                    required: true,
                },
                FieldSpec {
                    key: "author",
                    name: "Author",
                    description: "Who said it",
                    field_type: FieldType::SingleLineText,
                    required: true,
                },
                FieldSpec {
                    key: "role",
                    name: "Role",
                    description: "Job title or context shown under the author",
                    field_type: FieldType::SingleLineText,
                    required: false,
                },
                FieldSpec {
                    key: "avatar",
                    name: "Avatar",
                    description: "Author photo",
                    field_type: FieldType::FileReference,
                    required: false,
                },
                FieldSpec {
                    key: "rating",
                    name: "Rating",
                    description: "Star rating from 1 to 5",
                    field_type: FieldType::Integer,
                    required: false,
                },
            ],
        },
        MetaobjectSpec {
            object_type: "press_logo",
            name: "Press logo",
            fields: vec![
                FieldSpec {
                    key: "name",
                    name: "Name",
                    description: "Publication name, used for alt text",
                    field_type: FieldType::SingleLineText,
                    required: true,
                },
                FieldSpec {
                    key: "logo",
                    name: "Logo",
                    description: "Logo image",
                    field_type: FieldType::FileReference,
                    required: true,
                },
                FieldSpec {
                    key: "article_url",
                    name: "Article URL",
                    description: "Link to the article or mention",
                    field_type: FieldType::Url,
                    required: false,
                },
            ],
        },
    ]
}

pub fn metafields() -> Vec<MetafieldSpec> {
    vec![
        MetafieldSpec {
            namespace: METAFIELD_NAMESPACE,
            key: "hero_eyebrow",
            name: "Hero eyebrow",
            description: "Short kicker line shown above the product title in the hero section",
            field_type: FieldType::SingleLineText,
            owner: OwnerType::Product,
        },
        MetafieldSpec {
            namespace: METAFIELD_NAMESPACE,
            key: "review_count",
            name: "Review count",
            description: "Number of reviews shown next to the star rating",
            field_type: FieldType::Integer,
            owner: OwnerType::Product,
        },
        MetafieldSpec {
            namespace: METAFIELD_NAMESPACE,
            key: "avg_rating",
            name: "Average rating",
            description: "Average star rating, out of 5",
            field_type: FieldType::Decimal,
            owner: OwnerType::Product,
        },
        MetafieldSpec {
            namespace: METAFIELD_NAMESPACE,
            key: "usp_pills",
            name: "USP pills",
            description: "Short selling points rendered as pills under the buy box",
            field_type: FieldType::TextList,
            owner: OwnerType::Product,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn metaobject_catalog_matches_theme_contract() {
        let types: Vec<&str> = metaobjects().iter().map(|s| s.object_type).collect();
        assert_eq!(types, vec!["badge", "testimonial", "press_logo"]);
    }

    #[test]
    fn metafield_catalog_matches_theme_contract() {
        let specs = metafields();
        let keys: Vec<&str> = specs.iter().map(|s| s.key).collect();
        assert_eq!(keys, vec!["hero_eyebrow", "review_count", "avg_rating", "usp_pills"]);

        for spec in &specs {
            assert_eq!(spec.namespace, "qf");
            assert_eq!(spec.owner, OwnerType::Product);
        }

        assert_eq!(specs[0].field_type, FieldType::SingleLineText);
        assert_eq!(specs[1].field_type, FieldType::Integer);
        assert_eq!(specs[2].field_type, FieldType::Decimal);
        assert_eq!(specs[3].field_type, FieldType::TextList);
    }

    #[test]
    fn field_keys_are_unique_within_each_type() {
        for spec in metaobjects() {
            let mut seen = HashSet::new();
            for field in &spec.fields {
                assert!(
                    seen.insert(field.key),
                    "duplicate field key '{}' in metaobject '{}'",
                    field.key,
                    spec.object_type
                );
            }
        }
    }

    #[test]
    fn type_names_match_admin_api() {
        assert_eq!(FieldType::SingleLineText.api_name(), "single_line_text_field");
        assert_eq!(FieldType::TextList.api_name(), "list.single_line_text_field");
        assert_eq!(OwnerType::Product.api_name(), "PRODUCT");
    }
}
