//! Write a synthetic catalog CSV for trying out the dashboard pipeline:
//! `cargo run --bin generate_sample [out.csv] [rows]`

use anyhow::{Context, Result};

const TYPES: [&str; 2] = ["Movie", "TV Show"];

// Mostly known codes plus one oddball so the "(Unknown)" label path shows up.
const RATINGS: [&str; 8] = ["TV-MA", "TV-14", "PG", "PG-13", "R", "TV-Y7", "G", "66 min"];

const COUNTRIES: [&str; 10] = [
    "United States",
    "India",
    "United Kingdom",
    "Canada",
    "France",
    "Japan",
    "South Korea",
    "Spain",
    "Mexico",
    "Germany",
];

const GENRES: [&str; 8] = [
    "Dramas",
    "Comedies",
    "Documentaries",
    "Action & Adventure",
    "International TV Shows",
    "Kids' TV",
    "Thrillers",
    "Romantic Movies",
];

const FIRST_NAMES: [&str; 8] = [
    "Ana", "David", "Priya", "Kenji", "Maria", "Samuel", "Lucia", "Omar",
];
const LAST_NAMES: [&str; 8] = [
    "Alvarez", "Chen", "Kapoor", "Sato", "Rossi", "Okafor", "Dubois", "Novak",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform integer in `[0, n)`.
    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a>(&mut self, pool: &[&'a str]) -> &'a str {
        pool[self.below(pool.len())]
    }

    /// 1 to `max` distinct-ish picks joined by `", "`.
    fn pick_joined(&mut self, pool: &[&str], max: usize) -> String {
        let n = 1 + self.below(max);
        let picks: Vec<&str> = (0..n).map(|_| self.pick(pool)).collect();
        picks.join(", ")
    }

    fn person(&mut self) -> String {
        format!("{} {}", self.pick(&FIRST_NAMES), self.pick(&LAST_NAMES))
    }
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let out = args.next().unwrap_or_else(|| "catalog_titles.csv".to_string());
    let rows: usize = args
        .next()
        .unwrap_or_else(|| "500".to_string())
        .parse()
        .context("row count must be an integer")?;

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&out).with_context(|| format!("creating {out}"))?;
    writer.write_record([
        "title",
        "type",
        "rating",
        "country",
        "listed_in",
        "cast",
        "director",
        "date_added",
    ])?;

    for i in 0..rows {
        let date_added = if rng.below(50) == 0 {
            // A few rows without a date, which the loader drops.
            String::new()
        } else {
            format!(
                "{} {}, {}",
                MONTHS[rng.below(12)],
                1 + rng.below(28),
                2008 + rng.below(17)
            )
        };
        let cast = (0..1 + rng.below(4))
            .map(|_| rng.person())
            .collect::<Vec<_>>()
            .join(", ");

        writer.write_record([
            format!("Sample Title {i:04}"),
            rng.pick(&TYPES).to_string(),
            if rng.below(20) == 0 {
                String::new()
            } else {
                rng.pick(&RATINGS).to_string()
            },
            rng.pick_joined(&COUNTRIES, 3),
            rng.pick_joined(&GENRES, 3),
            cast,
            rng.person(),
            date_added,
        ])?;
    }

    writer.flush()?;
    println!("wrote {rows} rows to {out}");
    Ok(())
}
