use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A stand-in generator: a `#!/bin/sh` script that records every call and
/// answers with canned output, fails, or hangs.
///
/// Each call `n` stores its arguments as `call{n}.arg{i}`. Replies come from
/// `reply{n}.txt` when present, else `reply.txt`.
pub(crate) struct FakeGenerator {
    dir: PathBuf,
}

enum Behavior {
    Reply,
    Fail { stderr: String, code: i32 },
    Hang { seconds: u64 },
}

impl FakeGenerator {
    pub(crate) fn new(parent: &Path) -> Self {
        let dir = parent.join("fake-generator");
        std::fs::create_dir_all(&dir).unwrap();
        let fake = Self { dir };
        fake.write_script(Behavior::Reply);
        fake
    }

    fn script_path(&self) -> PathBuf {
        self.dir.join("claude")
    }

    fn write_script(&self, behavior: Behavior) {
        let dir = shell_words::quote(&self.dir.to_string_lossy()).into_owned();
        let action = match behavior {
            Behavior::Reply => "if [ -f \"$dir/reply$n.txt\" ]; then cat \"$dir/reply$n.txt\"; \
                 elif [ -f \"$dir/reply.txt\" ]; then cat \"$dir/reply.txt\"; fi"
                .to_string(),
            Behavior::Fail { stderr, code } => format!(
                "printf '%s' {} >&2\nexit {}",
                shell_words::quote(&stderr),
                code
            ),
            Behavior::Hang { seconds } => format!("exec sleep {}", seconds),
        };
        let script = format!(
            "#!/bin/sh\n\
             dir={dir}\n\
             n=$(cat \"$dir/count\" 2>/dev/null || echo 0)\n\
             n=$((n+1))\n\
             echo \"$n\" > \"$dir/count\"\n\
             i=0\n\
             for a in \"$@\"; do i=$((i+1)); printf '%s' \"$a\" > \"$dir/call$n.arg$i\"; done\n\
             echo \"$i\" > \"$dir/call$n.argc\"\n\
             {action}\n"
        );
        std::fs::write(self.script_path(), script).unwrap();
    }

    /// Answer every call with `text`.
    pub(crate) fn reply(self, text: &str) -> Self {
        std::fs::write(self.dir.join("reply.txt"), text).unwrap();
        self.write_script(Behavior::Reply);
        self
    }

    /// Answer call `n` (1-based) with `replies[n - 1]`.
    pub(crate) fn replies(self, replies: &[&str]) -> Self {
        for (i, text) in replies.iter().enumerate() {
            std::fs::write(self.dir.join(format!("reply{}.txt", i + 1)), text).unwrap();
        }
        self.write_script(Behavior::Reply);
        self
    }

    pub(crate) fn fail(self, stderr: &str, code: i32) -> Self {
        self.write_script(Behavior::Fail {
            stderr: stderr.to_string(),
            code,
        });
        self
    }

    pub(crate) fn hang(self, seconds: u64) -> Self {
        self.write_script(Behavior::Hang { seconds });
        self
    }

    /// Value for `claude_cmd`. Run through `sh` so the script needs no exec bit.
    pub(crate) fn command(&self) -> String {
        format!(
            "sh {}",
            shell_words::quote(&self.script_path().to_string_lossy())
        )
    }

    pub(crate) fn calls(&self) -> usize {
        std::fs::read_to_string(self.dir.join("count"))
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    pub(crate) fn args(&self, call: usize) -> Vec<String> {
        let argc: usize = std::fs::read_to_string(self.dir.join(format!("call{}.argc", call)))
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0);
        (1..=argc)
            .map(|i| {
                std::fs::read_to_string(self.dir.join(format!("call{}.arg{}", call, i)))
                    .unwrap_or_default()
            })
            .collect()
    }

    pub(crate) fn last_args(&self) -> Vec<String> {
        self.args(self.calls())
    }

    /// Prompt (last argument) of call `n`.
    pub(crate) fn prompt(&self, call: usize) -> String {
        self.args(call).pop().unwrap_or_default()
    }

    pub(crate) fn last_prompt(&self) -> String {
        self.prompt(self.calls())
    }
}

/// Minimal page with the given marked sections.
pub(crate) fn page_with_sections(sections: &[(&str, &str)]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<title>Acme</title>\n\
         <script src=\"https://cdn.tailwindcss.com\"></script>\n</head>\n<body>\n",
    );
    for (name, body) in sections {
        html.push_str(&format!(
            "<!-- START: {0} -->\n{1}\n<!-- END: {0} -->\n",
            name, body
        ));
    }
    html.push_str("</body>\n</html>\n");
    html
}
