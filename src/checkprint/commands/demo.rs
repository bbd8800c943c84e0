use crate::model::{Checklist, ChecklistItem};

/// The built-in sample used by `checkprint demo`.
pub fn checklist() -> Checklist {
    Checklist::new(
        "Demo",
        vec![ChecklistItem::open("Item A"), ChecklistItem::done("Item B")],
    )
}
