use diesel::prelude::*;
use game_reviews::schema::{categories, comments, reviews, users};
use game_reviews::seed::{seed, test_data};

mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    let conn = pool.get();
    assert!(conn.is_ok());
}

#[test]
fn seeding_loads_every_fixture_table() {
    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().unwrap();

    let categories_total: i64 = categories::table.count().get_result(&mut conn).unwrap();
    let users_total: i64 = users::table.count().get_result(&mut conn).unwrap();
    let reviews_total: i64 = reviews::table.count().get_result(&mut conn).unwrap();
    let comments_total: i64 = comments::table.count().get_result(&mut conn).unwrap();

    assert_eq!(
        (categories_total, users_total, reviews_total, comments_total),
        (4, 4, 13, 6)
    );
}

#[test]
fn reseeding_restores_fixture_state_and_id_counters() {
    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().unwrap();

    diesel::insert_into(comments::table)
        .values((
            comments::body.eq("extra"),
            comments::review_id.eq(1),
            comments::author.eq("mallionaire"),
        ))
        .execute(&mut conn)
        .unwrap();
    diesel::update(reviews::table.find(1))
        .set(reviews::votes.eq(500))
        .execute(&mut conn)
        .unwrap();

    seed(&mut conn, &test_data().unwrap()).unwrap();

    let total: i64 = comments::table.count().get_result(&mut conn).unwrap();
    let max_id: Option<i32> = comments::table
        .select(diesel::dsl::max(comments::comment_id))
        .first(&mut conn)
        .unwrap();
    let votes: i32 = reviews::table
        .find(1)
        .select(reviews::votes)
        .first(&mut conn)
        .unwrap();
    assert_eq!(total, 6);
    assert_eq!(max_id, Some(6));
    assert_eq!(votes, 1);
}

#[test]
fn foreign_keys_are_enforced() {
    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().unwrap();

    let result = diesel::insert_into(comments::table)
        .values((
            comments::body.eq("ghost"),
            comments::review_id.eq(2),
            comments::author.eq("nobody"),
        ))
        .execute(&mut conn);

    assert!(result.is_err());
}

#[test]
fn empty_comment_bodies_are_rejected_by_the_schema() {
    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().unwrap();

    let result = diesel::insert_into(comments::table)
        .values((
            comments::body.eq("   "),
            comments::review_id.eq(2),
            comments::author.eq("mallionaire"),
        ))
        .execute(&mut conn);

    assert!(result.is_err());
}
