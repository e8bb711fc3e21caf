//! Seed data for first run.
//!
//! Two sources: a fixed set of five hand-written café reviews (stable ids
//! rev001..rev005), and three synthetic customer cohorts spread over the
//! last seven calendar days so the store looks lived-in. Everything here is
//! deterministic for a given `today`; the only state is the id counter
//! shared across cohorts.

use chrono::{Duration, NaiveDate};
use serde_json::Number;

use crate::models::review::Review;

/// One synthetic cohort: id prefix, customers, review templates, and the
/// rating every member of the cohort gives.
struct Cohort {
    prefix: &'static str,
    customers: &'static [&'static str],
    templates: &'static [&'static str],
    rating: i64,
}

// VIP regulars, always maximum rating
static VIP: Cohort = Cohort {
    prefix: "vip",
    customers: &["김지은", "박서준", "이하늘"],
    templates: &[
        "역시 최고의 카페입니다. 올 때마다 만족해요!",
        "시그니처 라떼는 여기가 제일이에요. 단골 인증합니다.",
        "직원분들이 제 취향을 기억해주셔서 감동이었어요.",
        "원두 퀄리티가 한결같이 좋네요. 오늘도 잘 마셨습니다.",
    ],
    rating: 5,
};

// Loyal customers, one below maximum
static LOYAL: Cohort = Cohort {
    prefix: "loyal",
    customers: &["최민재", "정유나", "강도현", "윤소희"],
    templates: &[
        "자주 오는 곳이에요. 오늘도 좋았습니다.",
        "디저트 새 메뉴 괜찮네요. 다음에 또 시킬게요.",
        "분위기가 편해서 공부하러 자주 옵니다.",
    ],
    rating: 4,
};

// Detractors, minimum rating
static BLACK: Cohort = Cohort {
    prefix: "black",
    customers: &["오태식", "한가람"],
    templates: &[
        "주문이 계속 밀려서 너무 오래 기다렸습니다.",
        "자리가 좁고 시끄러워서 다시는 안 올 것 같아요.",
        "커피가 식어서 나왔어요. 실망입니다.",
    ],
    rating: 1,
};

// Walk-in pool with topically varied reviews; each template carries its own
// rating instead of a cohort-wide one.
const RECENT_CUSTOMERS: &[&str] = &["서지우", "임채원", "노은찬", "배수아", "황민규"];
const RECENT_TEMPLATES: &[(&str, i64)] = &[
    ("브런치 메뉴가 생각보다 알차요.", 4),
    ("주차 공간이 부족한 게 아쉽네요.", 3),
    ("창가 자리 뷰가 정말 좋아요!", 5),
    ("콘센트 자리가 몇 개 없어요.", 3),
    ("케이크 종류가 다양해서 고르는 재미가 있어요.", 4),
    ("음악 볼륨이 조금 큰 편이에요.", 2),
];

/// Complete seed collection: the fixed five reviews plus the generated
/// cohorts. Written to the backing file when it does not exist yet.
pub fn seed_reviews(today: NaiveDate) -> Vec<Review> {
    let mut reviews = fixed_reviews();
    reviews.extend(generate_cohort_reviews(today));
    reviews
}

/// The original hand-written dummy reviews, kept verbatim for stable ids.
pub fn fixed_reviews() -> Vec<Review> {
    let fixed: &[(&str, &str, &str, &str, i64)] = &[
        (
            "rev001",
            "김민수",
            "커피가 정말 맛있어요! 분위기도 아늑하고 직원분들도 친절하시네요. 다음에 또 방문하고 싶습니다.",
            "2025-01-13",
            5,
        ),
        (
            "rev002",
            "이영희",
            "음료는 괜찮았는데 대기 시간이 너무 길었어요. 주문하고 20분이나 기다렸습니다.",
            "2025-01-13",
            3,
        ),
        (
            "rev003",
            "박철수",
            "디저트가 신선하고 맛있었습니다! 특히 티라미수가 일품이에요. 조용한 분위기도 마음에 듭니다.",
            "2025-01-14",
            5,
        ),
        (
            "rev004",
            "정수진",
            "와이파이가 잘 안 되고 콘센트도 부족해요. 노트북 작업하기에는 불편합니다.",
            "2025-01-14",
            2,
        ),
        (
            "rev005",
            "홍길동",
            "라떼 아트가 정말 예쁘고 맛도 좋았어요! 사진 찍기에도 좋고 인스타그램에 올렸더니 반응이 좋네요.",
            "2025-01-14",
            5,
        ),
    ];
    fixed
        .iter()
        .map(|&(id, name, text, date, rating)| Review {
            id: id.to_string(),
            customer_name: name.to_string(),
            review_text: text.to_string(),
            date: date.to_string(),
            rating: Number::from(rating),
            reply: None,
        })
        .collect()
}

/// Synthetic cohort reviews distributed over the last seven calendar days.
///
/// Each customer leaves 1..=3 reviews (index-derived, so the counts look
/// irregular without being random), cycling modularly through the cohort's
/// template list. The id counter is shared across all cohorts and zero
/// padded to three digits (vip_001, loyal_004, ...).
pub fn generate_cohort_reviews(today: NaiveDate) -> Vec<Review> {
    let mut reviews = Vec::new();
    let mut counter: usize = 1;

    for cohort in [&VIP, &LOYAL, &BLACK] {
        for (ci, customer) in cohort.customers.iter().enumerate() {
            let repeats = 1 + (ci * 2 + cohort.customers.len()) % 3;
            for r in 0..repeats {
                let template = cohort.templates[(ci + r) % cohort.templates.len()];
                reviews.push(Review {
                    id: format!("{}_{:03}", cohort.prefix, counter),
                    customer_name: customer.to_string(),
                    review_text: template.to_string(),
                    date: date_in_window(today, counter),
                    rating: Number::from(cohort.rating),
                    reply: None,
                });
                counter += 1;
            }
        }
    }

    for (ci, customer) in RECENT_CUSTOMERS.iter().enumerate() {
        let (text, rating) = RECENT_TEMPLATES[ci % RECENT_TEMPLATES.len()];
        reviews.push(Review {
            id: format!("recent_{:03}", counter),
            customer_name: customer.to_string(),
            review_text: text.to_string(),
            date: date_in_window(today, counter),
            rating: Number::from(rating),
            reply: None,
        });
        counter += 1;
    }

    reviews
}

// Cycle over the most recent seven calendar days, newest first.
fn date_in_window(today: NaiveDate, seq: usize) -> String {
    let days_ago = (seq % 7) as i64;
    (today - Duration::days(days_ago))
        .format("%Y-%m-%d")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()
    }

    #[test]
    fn test_deterministic_for_fixed_today() {
        assert_eq!(seed_reviews(fixed_today()), seed_reviews(fixed_today()));
    }

    #[test]
    fn test_cohort_ratings() {
        for review in generate_cohort_reviews(fixed_today()) {
            let rating = review.rating.as_i64().unwrap();
            if review.id.starts_with("vip_") {
                assert_eq!(rating, 5);
            } else if review.id.starts_with("loyal_") {
                assert_eq!(rating, 4);
            } else if review.id.starts_with("black_") {
                assert_eq!(rating, 1);
            } else {
                assert!(review.id.starts_with("recent_"), "unexpected id {}", review.id);
                assert!((1..=5).contains(&rating));
            }
        }
    }

    #[test]
    fn test_dates_within_last_seven_days() {
        let today = fixed_today();
        let oldest = today - Duration::days(6);
        for review in generate_cohort_reviews(today) {
            let date = NaiveDate::parse_from_str(&review.date, "%Y-%m-%d").unwrap();
            assert!(date <= today && date >= oldest, "date {} out of window", review.date);
        }
    }

    #[test]
    fn test_counter_shared_across_cohorts() {
        let reviews = generate_cohort_reviews(fixed_today());
        let numbers: Vec<usize> = reviews
            .iter()
            .map(|r| r.id.rsplit('_').next().unwrap().parse().unwrap())
            .collect();
        let expected: Vec<usize> = (1..=reviews.len()).collect();
        assert_eq!(numbers, expected);
    }

    #[test]
    fn test_seed_ids_unique() {
        let reviews = seed_reviews(fixed_today());
        let ids: HashSet<&str> = reviews.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), reviews.len());
    }

    #[test]
    fn test_fixed_reviews_keep_stable_ids() {
        let fixed = fixed_reviews();
        assert_eq!(fixed.len(), 5);
        assert_eq!(fixed[0].id, "rev001");
        assert_eq!(fixed[4].id, "rev005");
        assert!(fixed.iter().all(|r| r.reply.is_none()));
    }
}
