mod api;
mod services;

use api::handlers;

fn main() {
    let db = services::db::Database::connect();
    let user = handlers::create_user(&db, "alice");
    println!("created {}", user.name);
    println!("{:?}", handlers::get_user(&db, user.id).map(|u| u.name));
    println!("{}", handlers::list_users(&db).len());
    println!("{}", handlers::login(&db, "alice", "hunter2"));
    handlers::delete_user(&db, user.id);
}
