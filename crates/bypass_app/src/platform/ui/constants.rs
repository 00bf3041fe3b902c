pub const TITLE: &str = "Ad Link Bypass";
pub const INPUT_PLACEHOLDER: &str = "Paste your Ad Link here";

pub const HELP_IDLE: &str = "Enter: submit | Esc: quit";
pub const HELP_RESULT: &str =
    "Ctrl+O: open bypassed | Ctrl+Y: copy bypassed | Ctrl+T: copy original | Esc: quit";
