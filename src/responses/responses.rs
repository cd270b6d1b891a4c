use serde::Serialize;

const AUTHOR: &str = "Hugo Francisco Luis Inclán";

#[derive(Serialize, Clone, Debug)]
pub struct ErrorResponse {
    pub(crate) detail: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct ServiceDescription {
    pub(crate) mensaje: String,
    pub(crate) autor: String,
    pub(crate) endpoints: Vec<String>,
}

impl Default for ServiceDescription {
    fn default() -> Self {
        Self {
            mensaje: "API de Canciones Favoritas".to_string(),
            autor: AUTHOR.to_string(),
            endpoints: [
                "/inclan - Obtener nombre completo",
                "/canciones - Listar todas las canciones",
                "/canciones/{id} - Obtener una canción específica",
                "POST /canciones - Agregar una canción",
                "PUT /canciones/{id} - Actualizar una canción",
                "DELETE /canciones/{id} - Eliminar una canción",
            ]
            .iter()
            .map(|e| e.to_string())
            .collect(),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct IdentityResponse {
    pub(crate) mensaje: String,
    pub(crate) nombre_completo: String,
    pub(crate) autor: String,
}

impl Default for IdentityResponse {
    fn default() -> Self {
        Self {
            mensaje: "Bienvenido a la API de Canciones Favoritas".to_string(),
            nombre_completo: AUTHOR.to_string(),
            autor: AUTHOR.to_string(),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct DeletedResponse {
    pub(crate) mensaje: String,
    pub(crate) id: i32,
}

impl DeletedResponse {
    pub fn from_id(id: i32) -> Self {
        Self {
            mensaje: "Canción eliminada exitosamente".to_string(),
            id,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct HealthResponse {
    pub(crate) status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            database: Some("connected".to_string()),
            error: None,
        }
    }

    pub fn unhealthy(error: String) -> Self {
        Self {
            status: "unhealthy".to_string(),
            database: None,
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn health_shapes() {
        assert_eq!(
            serde_json::to_value(HealthResponse::healthy()).unwrap(),
            json!({"status": "healthy", "database": "connected"})
        );
        assert_eq!(
            serde_json::to_value(HealthResponse::unhealthy("refused".to_string())).unwrap(),
            json!({"status": "unhealthy", "error": "refused"})
        );
    }

    #[test]
    fn deleted_response_carries_id() {
        assert_eq!(
            serde_json::to_value(DeletedResponse::from_id(12)).unwrap(),
            json!({"mensaje": "Canción eliminada exitosamente", "id": 12})
        );
    }
}
