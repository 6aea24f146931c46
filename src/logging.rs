//! ログ出力の初期化
//!
//! ログは stderr に出す。進捗バーの表示中はバーを一旦消してから書き、
//! バーの描画と行が混ざらないようにする。

use indicatif::ProgressBar;
use std::io::{self, Write};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// 表示中の進捗バー
static ACTIVE_BAR: Mutex<Option<ProgressBar>> = Mutex::new(None);

/// tracing-subscriber を初期化
///
/// `RUST_LOG` があればそれに従う。なければ info（`verbose` なら自クレートだけ debug）
pub fn init(verbose: bool) {
    let default_level = if verbose { "resume_screen=debug,info" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(StderrWriter)
        .init();
}

/// 進捗バーを登録し、ガードのドロップで解除する
pub fn track_progress(bar: &ProgressBar) -> ProgressGuard {
    set_active(Some(bar.clone()));
    ProgressGuard { _private: () }
}

pub struct ProgressGuard {
    _private: (),
}

impl Drop for ProgressGuard {
    fn drop(&mut self) {
        set_active(None);
    }
}

fn set_active(bar: Option<ProgressBar>) {
    if let Ok(mut active) = ACTIVE_BAR.lock() {
        *active = bar;
    }
}

fn active_bar() -> Option<ProgressBar> {
    ACTIVE_BAR.lock().ok().and_then(|active| active.clone())
}

/// 書き込みの間だけ進捗バーを消すライター
pub struct SuspendingWriter<W> {
    inner: W,
}

impl<W: Write> Write for SuspendingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match active_bar() {
            Some(bar) => bar.suspend(|| self.inner.write(buf)),
            None => self.inner.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match active_bar() {
            Some(bar) => bar.suspend(|| self.inner.write_all(buf)),
            None => self.inner.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[derive(Clone, Copy, Default)]
struct StderrWriter;

impl<'a> MakeWriter<'a> for StderrWriter {
    type Writer = SuspendingWriter<io::Stderr>;

    fn make_writer(&'a self) -> Self::Writer {
        SuspendingWriter {
            inner: io::stderr(),
        }
    }
}
