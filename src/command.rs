use crate::{common::DRIVER_BIN, settings::DeviceSettings};

// The driver accepts three flag shapes:
//   -flag=value       plain settings
//   -dpi:slot=value   the DPI map
//   -flag             standalone switches

/// Argument vector that pushes every setting to the mouse. Element 0 is the
/// driver executable. Disabled DPI slots are left out.
pub fn build(settings: &DeviceSettings, config_path: &str) -> Vec<String> {
    let mut cmd = vec![DRIVER_BIN.to_string()];

    if !config_path.is_empty() {
        cmd.push(format!("-config-path={config_path}"));
    }

    if settings.reapply_config {
        cmd.push("-reapply-config".to_string());
    }

    cmd.push(format!("-polling-rate={}", settings.polling_rate));
    cmd.push(format!("-active-dpi={}", settings.active_dpi));

    cmd.extend(settings.dpi_slots()
        .filter(|&(_, value)| value > 0)
        .map(|(slot, value)| format!("-dpi:{slot}={value}")));

    cmd.push(format!("-key-response-time={}", settings.key_response_time));
    cmd.push(format!("-angle-snap={}", settings.angle_snap));
    cmd.push(format!("-ripple-control={}", settings.ripple_control));
    cmd.push(format!("-sleep-time={}", format_float(settings.sleep_time)));
    cmd.push(format!("-deep-sleep-time={}", settings.deep_sleep_time));

    cmd
}

pub fn query_charge() -> Vec<String> {
    vec![DRIVER_BIN.to_string(), "-query-charge".to_string()]
}

/// Shortest round-tripping decimal, always with a fractional part (`2.0`, not `2`).
fn format_float(value: f64) -> String {
    let s = value.to_string();
    if value.is_finite() && !s.contains('.') {
        format!("{s}.0")
    } else {
        s
    }
}

/// Shell-like rendering for display in the panel.
pub fn display(cmd: &[String]) -> String {
    cmd.iter()
        .map(|arg| if arg.contains(char::is_whitespace) {
            format!("'{arg}'")
        } else {
            arg.clone()
        })
        .collect::<Vec<_>>()
        .join(" ")
}
