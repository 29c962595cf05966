//! Fixture data and the routine that resets the store to it.
//!
//! Integration tests reseed before every case; the server can reseed on start
//! (`seed_on_start`) so a fresh checkout has something to serve.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use thiserror::Error;

use crate::domain::category::Category;
use crate::domain::comment::NewComment;
use crate::domain::review::NewReview;
use crate::domain::types::{
    AvatarUrl, CategoryDescription, CategorySlug, CommentBody, Designer, DisplayName, ImageUrl,
    ReviewBody, ReviewId, ReviewTitle, TypeConstraintError, Username,
};
use crate::domain::user::User;
use crate::models::category::Category as DbCategory;
use crate::models::comment::NewComment as DbNewComment;
use crate::models::review::NewReview as DbNewReview;
use crate::models::user::User as DbUser;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";
const DEFAULT_IMG_URL: &str =
    "https://images.pexels.com/photos/163064/play-stone-network-networked-interactive-163064.jpeg";

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid fixture value: {0}")]
    TypeConstraint(#[from] TypeConstraintError),
    #[error("invalid fixture timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),
    #[error("failed to write fixtures: {0}")]
    Database(#[from] diesel::result::Error),
}

/// A complete dataset to load into an empty store.
///
/// Review ids are assigned in insertion order starting from 1, and comments
/// refer to reviews by that position.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub categories: Vec<Category>,
    pub users: Vec<User>,
    pub reviews: Vec<NewReview>,
    pub comments: Vec<NewComment>,
}

fn timestamp(value: &str) -> Result<NaiveDateTime, SeedError> {
    Ok(NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)?)
}

fn category(slug: &str, description: &str) -> Result<Category, SeedError> {
    Ok(Category {
        slug: CategorySlug::new(slug)?,
        description: CategoryDescription::new(description)?,
    })
}

fn user(username: &str, name: &str, avatar_url: &str) -> Result<User, SeedError> {
    Ok(User {
        username: Username::new(username)?,
        name: DisplayName::new(name)?,
        avatar_url: AvatarUrl::new(avatar_url)?,
    })
}

#[allow(clippy::too_many_arguments)]
fn review(
    title: &str,
    designer: &str,
    owner: &str,
    review_img_url: &str,
    review_body: &str,
    category: &str,
    created_at: &str,
    votes: i32,
) -> Result<NewReview, SeedError> {
    Ok(NewReview {
        title: ReviewTitle::new(title)?,
        category: CategorySlug::new(category)?,
        designer: Designer::new(designer)?,
        owner: Username::new(owner)?,
        review_body: ReviewBody::new(review_body)?,
        review_img_url: ImageUrl::new(review_img_url)?,
        created_at: timestamp(created_at)?,
        votes,
    })
}

fn comment(
    body: &str,
    votes: i32,
    author: &str,
    review_id: i32,
    created_at: &str,
) -> Result<NewComment, SeedError> {
    Ok(NewComment {
        body: CommentBody::new(body)?,
        review_id: ReviewId::new(review_id)?,
        author: Username::new(author)?,
        votes,
        created_at: timestamp(created_at)?,
    })
}

/// The dataset the integration tests are written against.
///
/// Review 1 has a single vote and no comments; review 2 has three comments.
/// Six comments exist in total, so the next comment id is 7.
pub fn test_data() -> Result<SeedData, SeedError> {
    let categories = vec![
        category("euro game", "Abstact games that involve little luck")?,
        category(
            "social deduction",
            "Players attempt to uncover each other's hidden role",
        )?,
        category("dexterity", "Games involving physical skill")?,
        category("children's games", "Games suitable for children")?,
    ];

    let users = vec![
        user(
            "mallionaire",
            "haz",
            "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg",
        )?,
        user(
            "philippaclaire9",
            "philippa",
            "https://avatars2.githubusercontent.com/u/24604688?s=460&v=4",
        )?,
        user(
            "bainesface",
            "sarah",
            "https://avatars2.githubusercontent.com/u/24394918?s=400&v=4",
        )?,
        user(
            "dav3rid",
            "dave",
            "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png",
        )?,
    ];

    let reviews = vec![
        review(
            "Agricola",
            "Uwe Rosenberg",
            "mallionaire",
            "https://images.pexels.com/photos/974314/pexels-photo-974314.jpeg?w=700&h=700",
            "Farmyard fun!",
            "euro game",
            "2021-01-18 10:00:20.514",
            1,
        )?,
        review(
            "Jenga",
            "Leslie Scott",
            "philippaclaire9",
            "https://images.pexels.com/photos/4473494/pexels-photo-4473494.jpeg?w=700&h=700",
            "Fiddly fun for all the family",
            "dexterity",
            "2021-01-18 10:01:41.251",
            5,
        )?,
        review(
            "Ultimate Werewolf",
            "Akihisa Okui",
            "bainesface",
            DEFAULT_IMG_URL,
            "We couldn't find the werewolf!",
            "social deduction",
            "2021-01-18 10:01:41.251",
            5,
        )?,
        review(
            "Dolor reprehenderit",
            "Gamey McGameface",
            "mallionaire",
            DEFAULT_IMG_URL,
            "Consequat velit occaecat voluptate do. Dolor pariatur fugiat sint et proident ex do consequat est.",
            "social deduction",
            "2021-01-22 11:35:50.936",
            7,
        )?,
        review(
            "Proident tempor et.",
            "Seymour Buttz",
            "mallionaire",
            DEFAULT_IMG_URL,
            "Labore occaecat sunt qui commodo anim anim aliqua adipisicing aliquip fugiat.",
            "social deduction",
            "2021-01-07 09:06:08.077",
            5,
        )?,
        review(
            "Occaecat consequat officia in quis commodo.",
            "Ollie Tabooger",
            "mallionaire",
            DEFAULT_IMG_URL,
            "Fugiat fugiat enim officia laborum quis. Aliquip laboris non nulla nostrud magna exercitation in ullamco aute laborum cillum nisi sint.",
            "social deduction",
            "2020-09-13 14:19:28.077",
            8,
        )?,
        review(
            "Mollit elit qui incididunt veniam occaecat cupidatat",
            "Avery Wunzboogerz",
            "mallionaire",
            DEFAULT_IMG_URL,
            "Consectetur incididunt aliquip sunt officia. Magna ex nulla consectetur laboris incididunt ea non qui.",
            "social deduction",
            "2021-01-25 11:16:54.963",
            9,
        )?,
        review(
            "One Night Ultimate Werewolf",
            "Akihisa Okui",
            "mallionaire",
            DEFAULT_IMG_URL,
            "We couldn't find the werewolf!",
            "social deduction",
            "2021-01-18 10:01:41.251",
            5,
        )?,
        review(
            "A truly Quacking Game; Quacks of Quedlinburg",
            "Wolfgang Warsch",
            "mallionaire",
            DEFAULT_IMG_URL,
            "Ever wish you could try your hand at mixing potions? Quacks of Quedlinburg will have you mixing up a homebrew like no other.",
            "social deduction",
            "2021-01-18 10:01:41.251",
            10,
        )?,
        review(
            "Build you own tour de Yorkshire",
            "Asger Harding Granerud",
            "mallionaire",
            DEFAULT_IMG_URL,
            "Cold rain pours on the faces of your team of cyclists, you pulled to the front by your strong sprinter.",
            "social deduction",
            "2021-01-18 10:01:41.251",
            10,
        )?,
        review(
            "That's just what an evil person would say!",
            "Fiona Lohoar",
            "mallionaire",
            DEFAULT_IMG_URL,
            "If you've ever wanted to accuse your siblings, cousins or friends of being part of a plot to murder everyone whilst secretly concealing your own evil intentions, then this is the game for you.",
            "social deduction",
            "2021-01-18 10:01:41.251",
            8,
        )?,
        review(
            "Scythe; you're gonna need a bigger table!",
            "Jamey Stegmaier",
            "mallionaire",
            DEFAULT_IMG_URL,
            "Spend 30-45 minutes just setting up all of the pieces in the box. Prepare to be delighted.",
            "social deduction",
            "2021-01-22 10:37:04.839",
            100,
        )?,
        review(
            "Settlers of Catan: Don't Settle For Less",
            "Klaus Teuber",
            "mallionaire",
            DEFAULT_IMG_URL,
            "You have stumbled across an uncharted island rich in natural resources, but you are not alone.",
            "social deduction",
            "1970-01-10 02:08:38.400",
            16,
        )?,
    ];

    let comments = vec![
        comment(
            "I loved this game too!",
            16,
            "bainesface",
            2,
            "2017-11-22 12:43:33.389",
        )?,
        comment(
            "My dog loved this game too!",
            13,
            "mallionaire",
            3,
            "2021-01-18 10:09:05.410",
        )?,
        comment(
            "I didn't know dogs could play games",
            10,
            "philippaclaire9",
            3,
            "2021-01-18 10:09:48.110",
        )?,
        comment(
            "EPIC board game!",
            16,
            "bainesface",
            2,
            "2017-11-22 12:36:03.389",
        )?,
        comment(
            "Now this is a story all about how, board games turned my life upside down",
            13,
            "mallionaire",
            2,
            "2021-01-18 10:24:05.410",
        )?,
        comment(
            "Not sure about dogs, but my cat likes to get involved with board games",
            10,
            "philippaclaire9",
            3,
            "2021-03-27 19:48:58.110",
        )?,
    ];

    Ok(SeedData {
        categories,
        users,
        reviews,
        comments,
    })
}

/// Wipe every table, reset the id counters and load `data`.
///
/// Runs in a single transaction, so a failed seed leaves the previous
/// contents in place.
pub fn seed(conn: &mut SqliteConnection, data: &SeedData) -> Result<(), SeedError> {
    use crate::schema::{categories, comments, reviews, users};

    conn.transaction::<_, SeedError, _>(|conn| {
        diesel::delete(comments::table).execute(conn)?;
        diesel::delete(reviews::table).execute(conn)?;
        diesel::delete(users::table).execute(conn)?;
        diesel::delete(categories::table).execute(conn)?;
        diesel::sql_query("DELETE FROM sqlite_sequence WHERE name IN ('reviews', 'comments')")
            .execute(conn)?;

        let db_categories: Vec<DbCategory> =
            data.categories.iter().cloned().map(Into::into).collect();
        diesel::insert_into(categories::table)
            .values(&db_categories)
            .execute(conn)?;

        let db_users: Vec<DbUser> = data.users.iter().cloned().map(Into::into).collect();
        diesel::insert_into(users::table)
            .values(&db_users)
            .execute(conn)?;

        let db_reviews: Vec<DbNewReview> = data.reviews.iter().cloned().map(Into::into).collect();
        diesel::insert_into(reviews::table)
            .values(&db_reviews)
            .execute(conn)?;

        let db_comments: Vec<DbNewComment> =
            data.comments.iter().cloned().map(Into::into).collect();
        diesel::insert_into(comments::table)
            .values(&db_comments)
            .execute(conn)?;

        Ok(())
    })?;

    log::info!(
        "Seeded {} categories, {} users, {} reviews, {} comments",
        data.categories.len(),
        data.users.len(),
        data.reviews.len(),
        data.comments.len()
    );
    Ok(())
}
