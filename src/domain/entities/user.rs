/// Users are owned by the upstream authentication layer; the backend only
/// ever sees their resolved id.
#[derive(Debug, Clone)]
pub struct User;
