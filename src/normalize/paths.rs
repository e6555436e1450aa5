//! Candidate-path tables and the dotted-path resolver
//!
//! Upstream payloads arrive in several shapes depending on which backend
//! version served the lookup. Each target field therefore has an ordered
//! list of dotted property paths to probe; the first one that resolves to
//! a non-empty scalar wins. The tables are plain data so they can be
//! re-pointed at a schema change without touching the extraction logic.
//!
//! Each table ends with the canonical field name itself, so a payload that
//! is already in canonical shape normalizes back to the same row.

use serde_json::Value;

/// Paths that may carry the sample code inside the payload itself.
pub const CODE_PATHS: &[&str] = &["numeroAmostra", "amostra", "codigo", "id", "code"];

pub const DELIVERY_DATE_PATHS: &[&str] = &["dataEntrega", "entrega.data", "dataRegistro", "deliveryDate"];

pub const COMPARTMENT_PATHS: &[&str] = &[
    "compartimento",
    "equipamento.compartimento",
    "compartimentoNome",
    "compartment",
];

pub const CHASSIS_PATHS: &[&str] = &["chassi", "equipamento.chassi", "equipamento.numeroSerie", "chassis"];

pub const CLIENT_PATHS: &[&str] = &["obra", "cliente.nome", "equipamento.cliente", "clienteNome", "client"];

pub const EQUIPMENT_HOURS_PATHS: &[&str] =
    &["horimetro", "equipamento.horimetro", "horasEquipamento", "equipmentHours"];

pub const OIL_TYPE_PATHS: &[&str] = &["tipoOleo", "oleo.tipo", "lubrificante.nome", "oleoNome", "oilType"];

pub const STATUS_PATHS: &[&str] = &["status", "situacao", "statusAmostra"];

pub const COLLECTION_DATE_PATHS: &[&str] = &["dataColeta", "coleta.data", "dataAmostragem", "collectionDate"];

pub const TECHNICIAN_PATHS: &[&str] = &["responsavelColeta", "coleta.responsavel", "tecnico", "coletor", "technician"];

/// Walk a dotted path (`"equipamento.cliente"`) through a JSON tree.
///
/// Returns `None` when any segment is absent or the parent is not an object.
pub fn resolve_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Coerce a scalar JSON value to its trimmed string form.
///
/// Strings are trimmed as-is, numbers and booleans use their display form,
/// everything else (null, arrays, objects) yields `None`. An empty trimmed
/// string also yields `None` so callers fall through to the next candidate.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Resolve the first candidate path that yields a non-empty scalar.
pub fn first_candidate(root: &Value, paths: &[&str]) -> Option<String> {
    paths
        .iter()
        .find_map(|path| resolve_path(root, path).and_then(scalar_to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_nested_path() {
        let payload = json!({"equipamento": {"cliente": "Obra Norte"}});
        let value = resolve_path(&payload, "equipamento.cliente").unwrap();
        assert_eq!(value, "Obra Norte");
    }

    #[test]
    fn missing_segment_returns_none() {
        let payload = json!({"equipamento": {}});
        assert!(resolve_path(&payload, "equipamento.cliente").is_none());
        assert!(resolve_path(&payload, "cliente.nome").is_none());
    }

    #[test]
    fn path_through_non_object_returns_none() {
        let payload = json!({"equipamento": "texto"});
        assert!(resolve_path(&payload, "equipamento.cliente").is_none());
    }

    #[test]
    fn candidate_order_wins() {
        let payload = json!({
            "obra": "  ",
            "cliente": {"nome": "Mina Leste"},
            "clienteNome": "ignorado"
        });
        // "obra" trims to empty, so the second candidate is taken.
        assert_eq!(
            first_candidate(&payload, CLIENT_PATHS).as_deref(),
            Some("Mina Leste")
        );
    }

    #[test]
    fn numbers_coerce_to_string() {
        let payload = json!({"horimetro": 12345});
        assert_eq!(
            first_candidate(&payload, EQUIPMENT_HOURS_PATHS).as_deref(),
            Some("12345")
        );
    }

    #[test]
    fn null_is_skipped() {
        let payload = json!({"status": null, "situacao": "coletada"});
        assert_eq!(
            first_candidate(&payload, STATUS_PATHS).as_deref(),
            Some("coletada")
        );
    }
}
