use std::fs::File;
use std::io::Write;
use std::path::Path;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::session_config::SessionConfig;
use crate::metainfo::structs::decode_limits::DecodeLimits;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: Some(60),
            session: SessionConfig::default(),
            metainfo: DecodeLimits::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file<P: AsRef<Path>>(path: P, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config<P: AsRef<Path>>(path: P, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Loads and validates `path`.
    ///
    /// When the file is missing or corrupt and `create` is set, a default
    /// configuration is written there instead and an error is still
    /// returned so the operator can review it before starting.
    pub fn load_from_file<P: AsRef<Path>>(path: P, create: bool) -> Result<Configuration, CustomError> {
        let path = path.as_ref();
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);
                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path.display());
                    return Err(CustomError::new(&format!("will not create automatically {} file", path.display())));
                }
                eprintln!("Creating config file..");
                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path.display());
                        Err(CustomError::new(&format!("created {} file", path.display())))
                    }
                    Err(e) => {
                        eprintln!("{} file could not be created, check permissions...", path.display());
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path.display())))
                    }
                };
            }
        };
        println!("[VALIDATE] Validating configuration...");
        config.validate().map_err(|error| CustomError::new(&error.to_string()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(&self.log_level).is_none() {
            return Err(ConfigurationError::Invalid(format!("unknown log level '{}'", self.log_level)));
        }
        if self.session.default_size == 0 {
            return Err(ConfigurationError::Invalid(String::from("session.default_size must be greater than 0")));
        }

        let check_map = [
            ("metainfo.max_files", self.metainfo.max_files),
            ("metainfo.max_path_components", self.metainfo.max_path_components),
            ("metainfo.max_announce_tiers", self.metainfo.max_announce_tiers),
            ("metainfo.max_trackers_per_tier", self.metainfo.max_trackers_per_tier),
            ("metainfo.max_name_length", self.metainfo.max_name_length),
            ("metainfo.max_url_length", self.metainfo.max_url_length),
            ("metainfo.max_piece_count", self.metainfo.max_piece_count),
        ];
        for (name, value) in check_map {
            Self::validate_limit(name, value)?;
        }
        Ok(())
    }

    pub fn validate_limit(name: &str, value: usize) -> Result<(), ConfigurationError> {
        if value == 0 {
            return Err(ConfigurationError::Invalid(format!("{} must be greater than 0", name)));
        }
        Ok(())
    }
}
