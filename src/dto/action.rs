use strum::AsRefStr;

///
/// UI actions performed when notification fires
///
// OpenUrl and Remind are written by the reminder application, the seed uses only Show
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    OpenUrl,
    Remind,
    Show,
}
