use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Signed-in staff member. Set once at login, cleared at logout; records keep
/// their own snapshot of these fields instead of pointing back here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: String,
    pub nip: String,
    pub jabatan: String,
    pub photo: String,
}

/// Demo profile returned by the no-op login.
pub static MOCK_USER: Lazy<User> = Lazy::new(|| User {
    id: "1".to_string(),
    username: "guru_hebat".to_string(),
    name: "Budi Santoso, S.Pd.".to_string(),
    nip: "19850101 201012 1 001".to_string(),
    jabatan: "Guru Kelas IV-A".to_string(),
    photo: "https://picsum.photos/seed/teacher1/200/200".to_string(),
});
