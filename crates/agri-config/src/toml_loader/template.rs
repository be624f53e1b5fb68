//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Agri-Cult advisory client configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[server]
# base_url = "http://localhost:8000"   # overridden by AGRI_CULT_BASE_URL
# connect_timeout_secs = 10            # 1-60
# request_timeout_secs = 120           # 1-600

[session]
# welcome_message = "Explore the future of farming. ..."
# session_id = "default"               # unset = new id every run

[dashboard]
# enabled = true
# include_news = true

[logging]
# level = "INFO"                       # DEBUG, INFO, WARNING, ERROR (AGRI_CULT_LOG)
"##
    .to_string()
}
