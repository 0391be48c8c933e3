use chrono::{Duration, TimeZone, Utc};
use rand::Rng;
use uuid::Uuid;

const NUM_ROOTS: usize = 25;
const NUM_REPLIES: usize = 150;
const COMMENT_WORD_COUNT: usize = 20;

// Odds for a reply to answer another reply rather than a root comment
const DEEP_REPLY_PERCENT: u32 = 60;

fn gen_n_items(table: &str, n: usize, mut f: impl FnMut(usize) -> String) {
    println!("INSERT INTO {} VALUES", table);
    for i in 0..n {
        if i != 0 {
            println!(",");
        }
        print!("    {}", f(i));
    }
    println!();
    println!("ON CONFLICT DO NOTHING;");
}

fn main() {
    let mut rng = rand::thread_rng();
    let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    // Comments already generated, with their creation date. Replies always
    // get a date later than their parent's, so the generated forest sorts
    // like real data would.
    let mut comments = Vec::new();

    gen_n_items("comments", NUM_ROOTS + NUM_REPLIES, |i| {
        let id = Uuid::new_v4();
        let (parent, date) = match i < NUM_ROOTS {
            true => (
                None,
                epoch + Duration::minutes(rng.gen_range(0..60 * 24 * 30)),
            ),
            false => {
                let candidates = match rng.gen_ratio(DEEP_REPLY_PERCENT, 100) {
                    true => &comments[..],
                    false => &comments[..NUM_ROOTS],
                };
                let (parent, parent_date): &(Uuid, _) =
                    &candidates[rng.gen_range(0..candidates.len())];
                let date = *parent_date + Duration::minutes(rng.gen_range(1..60 * 24));
                (Some(*parent), date)
            }
        };
        comments.push((id, date));
        format!(
            "('{}', {}, '{}', '{}', '{}')",
            id,
            match parent {
                Some(p) => format!("'{}'", p),
                None => String::from("NULL"),
            },
            lipsum::lipsum_words(COMMENT_WORD_COUNT).replace('\'', ""),
            date.format("%Y-%m-%d %H:%M:%S+00"),
            date.format("%Y-%m-%d %H:%M:%S+00"),
        )
    });
}
