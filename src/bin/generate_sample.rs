use std::path::PathBuf;

use anyhow::{Context, Result};
use mycelia_ai::botany::loader::HEADERS;

/// Species the synthetic rows are derived from:
/// (common name, scientific name, type, typical height cm, typical pH).
const SPECIES: &[(&str, &str, &str, f64, f64)] = &[
    ("Achillée millefeuille", "Achillea millefolium", "Vivace", 45.0, 6.5),
    ("Lavande vraie", "Lavandula angustifolia", "Arbuste", 50.0, 7.2),
    ("Consoude officinale", "Symphytum officinale", "Vivace", 90.0, 6.5),
    ("Bourrache", "Borago officinalis", "Annuelle", 60.0, 6.5),
    ("Thym commun", "Thymus vulgaris", "Arbuste", 22.0, 7.5),
    ("Bruyère des neiges", "Erica carnea", "Arbuste", 25.0, 5.2),
    ("Fraisier des bois", "Fragaria vesca", "Vivace", 15.0, 6.0),
];

const HUMIDITY: &[&str] = &["Sol sec", "Sol frais", "Sol frais à humide", "Sol humide", ""];
const EXPOSURE: &[&str] = &["Plein soleil", "Soleil à mi-ombre", "Mi-ombre", "Ombre"];

const VARIANTS_PER_SPECIES: usize = 6;

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

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Format with a decimal comma, dropping a zero fraction: `6,5`, `40`.
fn french_number(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded:.1}").replace('.', ",")
    }
}

fn range_cell(low: f64, high: f64) -> String {
    format!("{}-{}", french_number(low), french_number(high))
}

fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_plants.csv"));

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    writer.write_record(HEADERS).context("writing header")?;

    let mut rows = 0usize;
    for &(common, scientific, kind, height, ph) in SPECIES {
        for variant in 0..VARIANTS_PER_SPECIES {
            let h = height * (0.7 + 0.6 * rng.next_f64());
            let ph_low = ph - 0.2 - rng.next_f64() * 0.8;
            let ph_high = ph + 0.2 + rng.next_f64() * 0.8;

            // Every fifth row leaves pH blank, the way field surveys often do.
            let ph_cell = if rows % 5 == 4 {
                String::new()
            } else {
                range_cell(ph_low, ph_high)
            };
            let common_cell = if variant == 0 {
                common.to_string()
            } else {
                format!("{common} ({variant})")
            };

            let record: [String; 22] = [
                common_cell,
                scientific.to_string(),
                kind.to_string(),
                format!("Variante synthétique {variant} de {common}"),
                range_cell(h * 0.8, h * 1.2),
                french_number(h * 0.7),
                String::new(),
                String::new(),
                ph_cell,
                rng.pick(HUMIDITY).to_string(),
                rng.pick(EXPOSURE).to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                "Non".to_string(),
                "Donnée générée".to_string(),
            ];
            writer.write_record(&record).context("writing row")?;
            rows += 1;
        }
    }
    writer.flush().context("flushing CSV")?;

    log::info!("Wrote {rows} plants to {}", output_path.display());
    println!("Wrote {rows} plants to {}", output_path.display());
    Ok(())
}
