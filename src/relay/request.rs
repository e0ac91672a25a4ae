use serde::Deserialize;

/// JSON body of `POST /post`.
#[derive(Deserialize, Debug)]
pub struct PostIdRequest {
    #[serde(default)]
    pub id: String,
}

impl PostIdRequest {
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}
