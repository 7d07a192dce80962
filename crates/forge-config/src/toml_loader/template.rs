//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Avatar Forge studio settings
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[viewport]
# width = 1280           # 1-8192 (logical pixels)
# height = 720           # 1-8192
# pixel_ratio = 2.0      # 0.5-4.0

[capture]
# width = 3840           # 1-8192
# height = 2160          # 1-8192
# file_prefix = "avatar" # files are named <prefix>-<unix millis>.png

[scene]
# background = "#02030a"
# camera_position = [2.6, 2.2, 3.2]
# camera_target = [0.0, 0.0, 0.0]
# fov_degrees = 42.0     # 10-120

[preview]
# frame_rate = 60        # 1-240
# frames = 120           # frames rendered before exporting

[logging]
# level = "forge=info"
"##
    .to_string()
}
