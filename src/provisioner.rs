use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::catalog::{MetafieldSpec, MetaobjectSpec};
use crate::client::AdminClient;

const METAOBJECT_DEFINITION_CREATE: &str = r#"
mutation CreateMetaobjectDefinition($definition: MetaobjectDefinitionCreateInput!) {
  metaobjectDefinitionCreate(definition: $definition) {
    metaobjectDefinition { id type }
    userErrors { field message code }
  }
}
"#;

const METAFIELD_DEFINITION_CREATE: &str = r#"
mutation CreateMetafieldDefinition($definition: MetafieldDefinitionInput!) {
  metafieldDefinitionCreate(definition: $definition) {
    createdDefinition { id name }
    userErrors { field message code }
  }
}
"#;

/// What happened to a single definition. A failed create is an error, not an
/// outcome: the run stops there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    AlreadyExists,
}

/// One entry from a mutation's `userErrors` list. `code` is not populated
/// for every error class, hence the message fallback below.
#[derive(Debug, Clone, Deserialize)]
pub struct UserError {
    #[serde(default)]
    pub field: Option<Vec<String>>,
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Ensures every cataloged definition exists, metaobjects first, in catalog
/// order. Strictly sequential; the first fatal error aborts the run and
/// later specs are not attempted.
pub async fn provision_all(
    client: &AdminClient,
    metaobjects: &[MetaobjectSpec],
    metafields: &[MetafieldSpec],
) -> Result<()> {
    for spec in metaobjects {
        match ensure_metaobject(client, spec).await? {
            Outcome::Created => {
                tracing::info!("Created metaobject definition '{}'", spec.object_type);
            }
            Outcome::AlreadyExists => {
                tracing::info!(
                    "Metaobject definition '{}' already exists, skipping",
                    spec.object_type
                );
            }
        }
    }

    for spec in metafields {
        match ensure_metafield(client, spec).await? {
            Outcome::Created => {
                tracing::info!(
                    "Created metafield definition '{}.{}' on {}",
                    spec.namespace,
                    spec.key,
                    spec.owner.api_name()
                );
            }
            Outcome::AlreadyExists => {
                tracing::info!(
                    "Metafield definition '{}.{}' already exists, skipping",
                    spec.namespace,
                    spec.key
                );
            }
        }
    }

    Ok(())
}

pub async fn ensure_metaobject(client: &AdminClient, spec: &MetaobjectSpec) -> Result<Outcome> {
    let variables = json!({ "definition": metaobject_input(spec) });
    let data = client
        .execute(METAOBJECT_DEFINITION_CREATE, variables)
        .await
        .with_context(|| format!("Failed to create metaobject definition '{}'", spec.object_type))?;

    let errors = user_errors(&data, "metaobjectDefinitionCreate")?;
    classify(&errors, &format!("metaobject definition '{}'", spec.object_type))
}

pub async fn ensure_metafield(client: &AdminClient, spec: &MetafieldSpec) -> Result<Outcome> {
    let variables = json!({ "definition": metafield_input(spec) });
    let data = client
        .execute(METAFIELD_DEFINITION_CREATE, variables)
        .await
        .with_context(|| {
            format!("Failed to create metafield definition '{}.{}'", spec.namespace, spec.key)
        })?;

    let errors = user_errors(&data, "metafieldDefinitionCreate")?;
    classify(
        &errors,
        &format!("metafield definition '{}.{}'", spec.namespace, spec.key),
    )
}

/// True when the remote rejected the create because the definition is
/// already there. Prefers the structured `TAKEN` code; falls back to the
/// message wording when no code is present.
pub fn is_duplicate_error(err: &UserError) -> bool {
    if let Some(code) = &err.code {
        if code.eq_ignore_ascii_case("TAKEN") {
            return true;
        }
    }
    is_duplicate_message(&err.message)
}

/// The message-text fallback. This couples to the Admin API's error wording,
/// which is not a stable contract; keep every known phrasing here.
pub fn is_duplicate_message(message: &str) -> bool {
    let message = message.to_lowercase();
    ["already exists", "already been taken", "already in use"]
        .iter()
        .any(|phrase| message.contains(phrase))
}

fn metaobject_input(spec: &MetaobjectSpec) -> Value {
    json!({
        "type": spec.object_type,
        "name": spec.name,
        "fieldDefinitions": spec
            .fields
            .iter()
            .map(|field| json!({
                "key": field.key,
                "name": field.name,
                "description": field.description,
                "type": field.field_type.api_name(),
                "required": field.required,
            }))
            .collect::<Vec<_>>(),
    })
}

fn metafield_input(spec: &MetafieldSpec) -> Value {
    json!({
        "namespace": spec.namespace,
        "key": spec.key,
        "name": spec.name,
        "description": spec.description,
        "type": spec.field_type.api_name(),
        "ownerType": spec.owner.api_name(),
    })
}

fn user_errors(data: &Value, mutation: &str) -> Result<Vec<UserError>> {
    let raw = data
        .get(mutation)
        .and_then(|m| m.get("userErrors"))
        .filter(|v| !v.is_null())
        .cloned()
        .unwrap_or_else(|| Value::Array(Vec::new()));
    serde_json::from_value(raw).context("Malformed userErrors in Admin API response")
}

fn classify(errors: &[UserError], what: &str) -> Result<Outcome> {
    if errors.is_empty() {
        return Ok(Outcome::Created);
    }
    if errors.iter().all(is_duplicate_error) {
        return Ok(Outcome::AlreadyExists);
    }

    for err in errors {
        tracing::error!(field = ?err.field, code = ?err.code, "{}: {}", what, err.message);
    }
    let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
    Err(anyhow!("Could not create {}: {}", what, messages.join("; ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err(code: Option<&str>, message: &str) -> UserError {
        UserError {
            field: Some(vec!["definition".to_string()]),
            message: message.to_string(),
            code: code.map(|c| c.to_string()),
        }
    }

    #[test]
    fn taken_code_is_a_duplicate() {
        assert!(is_duplicate_error(&err(Some("TAKEN"), "Type is invalid")));
        assert!(is_duplicate_error(&err(Some("taken"), "whatever")));
    }

    #[test]
    fn known_wordings_are_duplicates() {
        assert!(is_duplicate_message("Type has already been taken"));
        assert!(is_duplicate_message(
            "A definition for qf.review_count ALREADY EXISTS on this owner type"
        ));
        assert!(is_duplicate_message("Key is already in use for this namespace"));
    }

    #[test]
    fn other_messages_are_not_duplicates() {
        assert!(!is_duplicate_message("Type can't be blank"));
        assert!(!is_duplicate_message("Key is invalid"));
        assert!(!is_duplicate_error(&err(Some("INVALID"), "Key is invalid")));
    }

    #[test]
    fn classify_empty_errors_as_created() {
        assert_eq!(classify(&[], "metaobject definition 'badge'").unwrap(), Outcome::Created);
    }

    #[test]
    fn classify_all_duplicates_as_existing() {
        let errors = vec![err(Some("TAKEN"), "Type has already been taken")];
        assert_eq!(
            classify(&errors, "metaobject definition 'badge'").unwrap(),
            Outcome::AlreadyExists
        );
    }

    #[test]
    fn classify_mixed_errors_as_fatal() {
        let errors = vec![
            err(Some("TAKEN"), "Type has already been taken"),
            err(Some("INVALID"), "Field key is invalid"),
        ];
        let result = classify(&errors, "metaobject definition 'badge'");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Field key is invalid"));
    }

    #[test]
    fn user_errors_tolerates_missing_list() {
        let data = serde_json::json!({ "metaobjectDefinitionCreate": {} });
        assert!(user_errors(&data, "metaobjectDefinitionCreate").unwrap().is_empty());
    }
}
