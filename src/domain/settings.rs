use serde::{Deserialize, Serialize};

use super::entity::{require_text, Entity};
use crate::errors::ServiceError;

/// Declares a settings-style entity with a unique `name` and one free-form
/// payload field. The settings catalogue repeats this shape many times;
/// declaring it once keeps the instantiations from drifting apart.
macro_rules! keyed_setting {
    ($(#[$doc:meta])* $entity:ident, $request:ident, $response:ident, $label:literal, $payload:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Serialize, Deserialize)]
        pub struct $entity {
            pub id: i64,
            pub name: String,
            pub $payload: String,
        }

        #[derive(Debug, Clone, Deserialize)]
        pub struct $request {
            pub name: String,
            pub $payload: String,
        }

        #[derive(Debug, Clone, Serialize)]
        pub struct $response {
            pub id: i64,
            pub name: String,
            pub $payload: String,
        }

        impl Entity for $entity {
            type Request = $request;
            type Response = $response;

            const NAME: &'static str = $label;

            fn from_request(id: i64, req: $request) -> Result<Self, ServiceError> {
                Ok($entity {
                    id,
                    name: require_text("name", &req.name)?,
                    $payload: req.$payload,
                })
            }

            fn to_response(&self) -> $response {
                $response {
                    id: self.id,
                    name: self.name.clone(),
                    $payload: self.$payload.clone(),
                }
            }

            fn id(&self) -> i64 {
                self.id
            }

            fn set_id(&mut self, id: i64) {
                self.id = id;
            }

            fn conflicts_with(&self, other: &Self) -> bool {
                self.name == other.name
            }
        }
    };
}

keyed_setting!(
    /// A general-purpose configuration option. Named `OptionEntry` to stay
    /// clear of `std::option::Option`.
    OptionEntry,
    OptionEntryRequest,
    OptionEntryResponse,
    "Option",
    value
);

keyed_setting!(
    SecuritySetting,
    SecuritySettingRequest,
    SecuritySettingResponse,
    "SecuritySetting",
    value
);

keyed_setting!(
    SystemSetting,
    SystemSettingRequest,
    SystemSettingResponse,
    "SystemSetting",
    value
);

keyed_setting!(
    /// A named filesystem location used by export and import jobs.
    FileOpt,
    FileOptRequest,
    FileOptResponse,
    "FileOpt",
    path
);

keyed_setting!(
    Permission,
    PermissionRequest,
    PermissionResponse,
    "Permission",
    description
);

keyed_setting!(
    Role,
    RoleRequest,
    RoleResponse,
    "Role",
    description
);

// ── EditOpt ──────────────────────────────────────────────────────────────────

/// A named feature toggle for the editing UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditOpt {
    pub id: i64,
    pub name: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditOptRequest {
    pub name: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EditOptResponse {
    pub id: i64,
    pub name: String,
    pub enabled: bool,
}

impl Entity for EditOpt {
    type Request = EditOptRequest;
    type Response = EditOptResponse;

    const NAME: &'static str = "EditOpt";

    fn from_request(id: i64, req: EditOptRequest) -> Result<Self, ServiceError> {
        Ok(EditOpt {
            id,
            name: require_text("name", &req.name)?,
            enabled: req.enabled,
        })
    }

    fn to_response(&self) -> EditOptResponse {
        EditOptResponse {
            id: self.id,
            name: self.name.clone(),
            enabled: self.enabled,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn conflicts_with(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

// ── Language ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    pub id: i64,
    /// BCP 47 style tag, e.g. "en", "pt-BR".
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageRequest {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageResponse {
    pub id: i64,
    pub code: String,
    pub name: String,
}

impl Entity for Language {
    type Request = LanguageRequest;
    type Response = LanguageResponse;

    const NAME: &'static str = "Language";

    fn from_request(id: i64, req: LanguageRequest) -> Result<Self, ServiceError> {
        Ok(Language {
            id,
            code: require_text("code", &req.code)?,
            name: require_text("name", &req.name)?,
        })
    }

    fn to_response(&self) -> LanguageResponse {
        LanguageResponse {
            id: self.id,
            code: self.code.clone(),
            name: self.name.clone(),
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn conflicts_with(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

// ── LocalizedOption ──────────────────────────────────────────────────────────

/// The translated label of an option in one language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalizedOption {
    pub id: i64,
    pub language_id: i64,
    pub option_id: i64,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedOptionRequest {
    pub language_id: i64,
    pub option_id: i64,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocalizedOptionResponse {
    pub id: i64,
    pub language_id: i64,
    pub option_id: i64,
    pub label: String,
}

impl Entity for LocalizedOption {
    type Request = LocalizedOptionRequest;
    type Response = LocalizedOptionResponse;

    const NAME: &'static str = "LocalizedOption";

    fn from_request(id: i64, req: LocalizedOptionRequest) -> Result<Self, ServiceError> {
        Ok(LocalizedOption {
            id,
            language_id: req.language_id,
            option_id: req.option_id,
            label: require_text("label", &req.label)?,
        })
    }

    fn to_response(&self) -> LocalizedOptionResponse {
        LocalizedOptionResponse {
            id: self.id,
            language_id: self.language_id,
            option_id: self.option_id,
            label: self.label.clone(),
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn conflicts_with(&self, other: &Self) -> bool {
        self.language_id == other.language_id && self.option_id == other.option_id
    }
}

// ── Help ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Help {
    pub id: i64,
    pub topic: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HelpRequest {
    pub topic: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HelpResponse {
    pub id: i64,
    pub topic: String,
    pub content: String,
}

impl Entity for Help {
    type Request = HelpRequest;
    type Response = HelpResponse;

    const NAME: &'static str = "Help";

    fn from_request(id: i64, req: HelpRequest) -> Result<Self, ServiceError> {
        Ok(Help {
            id,
            topic: require_text("topic", &req.topic)?,
            content: require_text("content", &req.content)?,
        })
    }

    fn to_response(&self) -> HelpResponse {
        HelpResponse {
            id: self.id,
            topic: self.topic.clone(),
            content: self.content.clone(),
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
