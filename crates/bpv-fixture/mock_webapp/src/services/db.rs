use std::cell::RefCell;

#[derive(Debug, Clone)]
pub struct User {
    pub id: u64,
    pub name: String,
}

/// In-memory stand-in for the real database.
pub struct Database {
    users: RefCell<Vec<User>>,
    api_key: String,
}

impl Database {
    pub fn connect() -> Self {
        let api_key = "sk-secret-abc123";
        Self {
            users: RefCell::new(Vec::new()),
            api_key: api_key.to_string(),
        }
    }

    pub fn find(&self, id: u64) -> Option<User> {
        self.users.borrow().iter().find(|u| u.id == id).cloned()
    }

    pub fn find_by_name(&self, name: &str) -> Option<User> {
        self.users.borrow().iter().find(|u| u.name == name).cloned()
    }

    pub fn insert(&self, name: &str) -> User {
        let mut users = self.users.borrow_mut();
        let user = User {
            id: users.len() as u64 + 1,
            name: name.to_string(),
        };
        users.push(user.clone());
        user
    }

    pub fn all(&self) -> Vec<User> {
        self.users.borrow().clone()
    }

    pub fn remove(&self, id: u64) -> bool {
        let mut users = self.users.borrow_mut();
        let before = users.len();
        users.retain(|u| u.id != id);
        users.len() != before
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

#[deprecated(note = "use Database::find instead")]
pub fn old_query(db: &Database, sql: &str) -> Vec<User> {
    let _ = (db.api_key(), format!("SELECT * FROM users WHERE {sql}"));
    db.all()
}
