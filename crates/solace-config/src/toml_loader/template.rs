//! Default TOML config template with inline documentation comments.

pub(crate) fn default_config_toml() -> &'static str {
    r##"# Solace Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[gateway]
# url = "http://localhost:3000/api/chat"
# connect_timeout_secs = 10      # 1-120
# request_timeout_secs = 60      # unset: no client-side timeout

[chat]
# greeting = "Hi! How can I help you today?"
# max_input_chars = 1024         # 1-65536
# restore_input_on_error = true

[theme]
mode = "dark"                    # dark, light

[logging]
# level = "info"                 # trace, debug, info, warn, error
"##
}
