//! Per-shell hook scripts.

use std::path::PathBuf;

/// Executable name the hooks invoke.
pub const BIN_NAME: &str = "cd-recent";

/// Shells a hook can be rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
}

impl ShellType {
    /// Parse shell type from executable name.
    pub fn from_executable(exe: &str) -> Option<Self> {
        let name = std::path::Path::new(exe)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        match name.as_str() {
            "bash" => Some(Self::Bash),
            "zsh" => Some(Self::Zsh),
            "fish" => Some(Self::Fish),
            _ => None,
        }
    }

    /// Detect the user's shell from `$SHELL`, falling back to bash.
    pub fn detect() -> Self {
        std::env::var("SHELL")
            .ok()
            .and_then(|exe| Self::from_executable(&exe))
            .unwrap_or(Self::Bash)
    }

    /// Where this shell writes its history by default.
    pub fn default_history_file(self) -> PathBuf {
        let home = dirs::home_dir().unwrap_or_default();
        match self {
            Self::Bash => home.join(".bash_history"),
            Self::Zsh => home.join(".zsh_history"),
            Self::Fish => dirs::data_local_dir()
                .unwrap_or_else(|| home.join(".local").join("share"))
                .join("fish")
                .join("fish_history"),
        }
    }
}

/// Hook script that reports every directory change to `cd-recent --add`.
pub fn hook_script(shell: ShellType) -> String {
    let body = match shell {
        ShellType::Bash => format!(
            "cd() {{\n    builtin cd \"$@\" || return\n    command {bin} --add \"$PWD\"\n}}\n",
            bin = BIN_NAME
        ),
        ShellType::Zsh => format!(
            "autoload -Uz add-zsh-hook\n\
             _cd_recent_hook() {{\n    command {bin} --add \"$PWD\"\n}}\n\
             add-zsh-hook chpwd _cd_recent_hook\n",
            bin = BIN_NAME
        ),
        ShellType::Fish => format!(
            "function __cd_recent_hook --on-variable PWD\n    command {bin} --add \"$PWD\"\nend\n",
            bin = BIN_NAME
        ),
    };

    format!(
        "# {bin} hook: records each directory change (dynamic tracking).\n\
         # Enable it with `{bin} --toggle`. For retroactive tracking use\n\
         # `{bin} -H {history}` instead.\n{body}",
        bin = BIN_NAME,
        history = shell.default_history_file().display(),
        body = body
    )
}
