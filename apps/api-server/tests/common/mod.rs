//! Per-test store fixtures: a fresh in-memory store seeded with synthetic posts.

use std::sync::Arc;

use chrono::{Duration, Utc};
use rand::Rng;

use api_server::state::{AppState, StorageKind};
use blog_core::domain::{Author, BlogPost, NewBlogPost};
use blog_core::ports::PostRepository;
use blog_infra::memory::InMemoryPostRepository;

pub const SEED_COUNT: usize = 11;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Dennis", "Edsger", "Frances", "Grace", "John", "Katherine",
    "Ken", "Linus", "Margaret", "Niklaus", "Radia", "Tim",
];

const LAST_NAMES: &[&str] = &[
    "Allen", "Berners-Lee", "Dijkstra", "Hamilton", "Hopper", "Johnson", "Lamport", "Liskov",
    "Lovelace", "Perlman", "Ritchie", "Thompson", "Torvalds", "Turing", "Wirth",
];

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua",
    "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi", "aliquip",
];

fn pick<'a>(rng: &mut impl Rng, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

fn words(rng: &mut impl Rng, count: usize) -> String {
    (0..count)
        .map(|_| pick(rng, WORDS))
        .collect::<Vec<_>>()
        .join(" ")
}

fn sentences(rng: &mut impl Rng) -> String {
    let count = rng.gen_range(2..=5);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(4..=10);
            let sentence = words(rng, len);
            let mut chars = sentence.chars();
            match chars.next() {
                Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A synthetic post with a `created` timestamp somewhere in the past year.
pub fn generate_post(rng: &mut impl Rng) -> NewBlogPost {
    let author = Author::new(pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES));
    let title_len = rng.gen_range(2..=4);
    let title = words(rng, title_len);
    let content = sentences(rng);
    let created =
        Utc::now() - Duration::days(rng.gen_range(1..=365)) - Duration::seconds(rng.gen_range(0..86_400));

    NewBlogPost::new(author, title, content).with_created(created)
}

/// Store scope for a single test case. Built in `setup`, emptied in `teardown`.
pub struct Fixture {
    pub repo: Arc<InMemoryPostRepository>,
    pub seeded: Vec<BlogPost>,
}

impl Fixture {
    pub async fn setup() -> Self {
        let repo = Arc::new(InMemoryPostRepository::new());
        let mut rng = rand::thread_rng();

        let mut seeded = Vec::with_capacity(SEED_COUNT);
        for _ in 0..SEED_COUNT {
            let post = repo
                .insert(generate_post(&mut rng))
                .await
                .expect("seed insert");
            seeded.push(post);
        }

        Self { repo, seeded }
    }

    pub fn state(&self) -> AppState {
        AppState::with_repository(self.repo.clone(), StorageKind::Memory)
    }

    pub async fn find(&self, id: uuid::Uuid) -> Option<BlogPost> {
        self.repo.find_by_id(id).await.expect("store lookup")
    }

    pub async fn repo_len(&self) -> usize {
        self.repo.find_all().await.expect("store read").len()
    }

    /// The post `GET /posts` lists first.
    pub async fn repo_first(&self) -> BlogPost {
        self.repo
            .find_all()
            .await
            .expect("store read")
            .into_iter()
            .next()
            .expect("seeded store is not empty")
    }

    pub async fn teardown(self) {
        self.repo.delete_all().await.expect("teardown");
        assert!(self.repo.find_all().await.expect("store read").is_empty());
    }
}
