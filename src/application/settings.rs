use super::service::{contains_ci, EntityService};
use crate::domain::ports::Repository;
use crate::domain::settings::{
    EditOpt, EditOptResponse, FileOpt, FileOptResponse, Help, HelpResponse, Language,
    LanguageResponse, LocalizedOption, LocalizedOptionResponse, OptionEntry, OptionEntryResponse,
    Permission, PermissionResponse, Role, RoleResponse, SecuritySetting, SecuritySettingResponse,
    SystemSetting, SystemSettingResponse,
};
use crate::errors::ServiceError;

pub type OptionEntryService<R> = EntityService<OptionEntry, R>;
pub type SecuritySettingService<R> = EntityService<SecuritySetting, R>;
pub type SystemSettingService<R> = EntityService<SystemSetting, R>;
pub type FileOptService<R> = EntityService<FileOpt, R>;
pub type EditOptService<R> = EntityService<EditOpt, R>;
pub type LanguageService<R> = EntityService<Language, R>;
pub type LocalizedOptionService<R> = EntityService<LocalizedOption, R>;
pub type HelpService<R> = EntityService<Help, R>;
pub type PermissionService<R> = EntityService<Permission, R>;
pub type RoleService<R> = EntityService<Role, R>;

/// Adds the exact-name lookup every uniquely named setting entity exposes.
macro_rules! find_by_name_lookup {
    ($entity:ty, $response:ty) => {
        impl<R: Repository<$entity>> EntityService<$entity, R> {
            /// Exact name lookup; names are unique so at most one matches.
            pub fn find_by_name(&self, name: &str) -> Result<Option<$response>, ServiceError> {
                self.find_one_where(|e| e.name == name)
            }
        }
    };
}

find_by_name_lookup!(OptionEntry, OptionEntryResponse);
find_by_name_lookup!(SecuritySetting, SecuritySettingResponse);
find_by_name_lookup!(SystemSetting, SystemSettingResponse);
find_by_name_lookup!(FileOpt, FileOptResponse);
find_by_name_lookup!(Permission, PermissionResponse);
find_by_name_lookup!(Role, RoleResponse);
find_by_name_lookup!(EditOpt, EditOptResponse);

impl<R: Repository<EditOpt>> EntityService<EditOpt, R> {
    pub fn find_enabled(&self) -> Result<Vec<EditOptResponse>, ServiceError> {
        self.find_where(|e| e.enabled)
    }
}

impl<R: Repository<Language>> EntityService<Language, R> {
    pub fn find_by_code(&self, code: &str) -> Result<Option<LanguageResponse>, ServiceError> {
        self.find_one_where(|l| l.code == code)
    }
}

impl<R: Repository<LocalizedOption>> EntityService<LocalizedOption, R> {
    pub fn find_by_language(
        &self,
        language_id: i64,
    ) -> Result<Vec<LocalizedOptionResponse>, ServiceError> {
        self.find_where(|o| o.language_id == language_id)
    }

    pub fn find_by_option(
        &self,
        option_id: i64,
    ) -> Result<Vec<LocalizedOptionResponse>, ServiceError> {
        self.find_where(|o| o.option_id == option_id)
    }
}

impl<R: Repository<Help>> EntityService<Help, R> {
    pub fn find_by_topic(&self, topic: &str) -> Result<Vec<HelpResponse>, ServiceError> {
        self.find_where(|h| contains_ci(&h.topic, topic))
    }
}
