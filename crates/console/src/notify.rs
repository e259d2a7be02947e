//! Notice delivery (the toast analogue for a terminal).

use vendash_core::{Notice, NoticeKind};

/// Sink for user-visible notices. The binary prints; tests capture.
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// Prints notices to stdout with a severity tag.
#[derive(Debug, Default, Copy, Clone)]
pub struct PrintNotifier;

pub(crate) fn tag(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "[ OK ]",
        NoticeKind::Info => "[INFO]",
        NoticeKind::Error => "[FAIL]",
    }
}

impl Notifier for PrintNotifier {
    fn notify(&self, notice: &Notice) {
        println!("{} {}", tag(notice.kind), notice.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_distinct_per_severity() {
        assert_eq!(tag(NoticeKind::Success), "[ OK ]");
        assert_eq!(tag(NoticeKind::Info), "[INFO]");
        assert_eq!(tag(NoticeKind::Error), "[FAIL]");
    }
}
