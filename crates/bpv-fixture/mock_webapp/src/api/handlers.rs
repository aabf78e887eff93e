use crate::services::auth;
use crate::services::db::{Database, User};

pub fn get_user(db: &Database, id: u64) -> Option<User> {
    db.find(id)
}

pub fn create_user(db: &Database, name: &str) -> User {
    // TODO: validate the name before inserting
    db.insert(name)
}

pub fn login(db: &Database, name: &str, password: &str) -> bool {
    db.find_by_name(name)
        .map(|user| auth::verify(&user, password))
        .unwrap_or(false)
}

pub fn list_users(db: &Database) -> Vec<User> {
    db.all()
}

pub fn delete_user(db: &Database, id: u64) -> bool {
    db.remove(id)
}
