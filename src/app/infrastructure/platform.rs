use std::process::Command;

/// Best-effort check of the desktop's dark-mode preference.
/// Falls back to light when nothing can be detected.
pub fn detect_system_dark_mode() -> bool {
    #[cfg(target_os = "windows")]
    {
        use winreg::RegKey;
        use winreg::enums::HKEY_CURRENT_USER;

        let personalize = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize");
        if let Ok(key) = personalize {
            // AppsUseLightTheme: 0 = dark
            if let Ok(value) = key.get_value::<u32, _>("AppsUseLightTheme") {
                return value == 0;
            }
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(style) = command_stdout("defaults", &["read", "-g", "AppleInterfaceStyle"]) {
            return reports_dark(&style);
        }
    }

    #[cfg(target_os = "linux")]
    {
        let probes: [&[&str]; 2] = [
            &["get", "org.gnome.desktop.interface", "color-scheme"],
            &["get", "org.gnome.desktop.interface", "gtk-theme"],
        ];
        for args in probes {
            if let Some(out) = command_stdout("gsettings", args) {
                if reports_dark(&out) {
                    return true;
                }
            }
        }
    }

    false
}

/// Run a probe command, returning stdout only when it exited successfully.
#[allow(dead_code)]
fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Interpret a theme name or color-scheme value ("'prefer-dark'", "Adwaita-dark", "Dark").
pub fn reports_dark(value: &str) -> bool {
    value.to_lowercase().contains("dark")
}
