//! Notifier service - the social-proof activity ticker
//!
//! Fabricates "someone just deposited" notices from fixed name and
//! location pools. Amounts follow the original distribution: 70% fall
//! in $1,500..$100,000, the rest in $100,000..$305,000.

use rand::Rng;
use serde::Serialize;

const NAMES: [&str; 30] = [
    "Mike Andrew", "Sarah Johnson", "David Wilson", "Emma Thompson", "James Rodriguez",
    "Olivia Martinez", "Michael Brown", "Sophia Garcia", "Robert Taylor", "Isabella Lee",
    "William Anderson", "Mia Thomas", "Christopher Jackson", "Charlotte White", "Daniel Harris",
    "Amelia Martin", "Matthew Clark", "Harper Lewis", "Joseph Walker", "Evelyn Hall",
    "Joshua Young", "Abigail Allen", "Andrew King", "Emily Wright", "Ryan Scott",
    "Elizabeth Green", "Kevin Adams", "Avery Nelson", "Brian Baker", "Ella Carter",
];

const LOCATIONS: [(&str, &str); 30] = [
    ("Miami", "USA"),
    ("New York", "USA"),
    ("London", "UK"),
    ("Toronto", "Canada"),
    ("Sydney", "Australia"),
    ("Berlin", "Germany"),
    ("Paris", "France"),
    ("Tokyo", "Japan"),
    ("Singapore", "Singapore"),
    ("Dubai", "UAE"),
    ("Mumbai", "India"),
    ("Sao Paulo", "Brazil"),
    ("Mexico City", "Mexico"),
    ("Amsterdam", "Netherlands"),
    ("Seoul", "South Korea"),
    ("Hong Kong", "China"),
    ("Bangkok", "Thailand"),
    ("Rome", "Italy"),
    ("Madrid", "Spain"),
    ("Vancouver", "Canada"),
    ("Los Angeles", "USA"),
    ("Chicago", "USA"),
    ("Melbourne", "Australia"),
    ("Auckland", "New Zealand"),
    ("Stockholm", "Sweden"),
    ("Oslo", "Norway"),
    ("Copenhagen", "Denmark"),
    ("Zurich", "Switzerland"),
    ("Vienna", "Austria"),
    ("Brussels", "Belgium"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TickerKind {
    Deposit,
    Withdrawal,
    Exchange,
}

impl TickerKind {
    const ALL: [TickerKind; 3] = [
        TickerKind::Deposit,
        TickerKind::Withdrawal,
        TickerKind::Exchange,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            TickerKind::Deposit => "Recent Deposit",
            TickerKind::Withdrawal => "Recent Withdrawal",
            TickerKind::Exchange => "Recent Exchange",
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            TickerKind::Deposit => "deposited",
            TickerKind::Withdrawal => "withdrew",
            TickerKind::Exchange => "exchanged",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerNotice {
    pub kind: TickerKind,
    pub title: String,
    pub message: String,
}

#[derive(Default)]
pub struct NotifierService;

impl NotifierService {
    pub fn new() -> Self {
        Self
    }

    /// One fabricated notice from the thread-local RNG.
    pub fn generate(&self) -> TickerNotice {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Deterministic variant for tests: caller supplies the RNG.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> TickerNotice {
        let name = NAMES[rng.gen_range(0..NAMES.len())];
        let (city, country) = LOCATIONS[rng.gen_range(0..LOCATIONS.len())];
        let kind = TickerKind::ALL[rng.gen_range(0..TickerKind::ALL.len())];
        let amount = random_amount(rng);

        TickerNotice {
            kind,
            title: kind.title().to_string(),
            message: format!(
                "{name} from {city}, {country} {verb} sum of ${amount:.2}",
                verb = kind.verb(),
            ),
        }
    }
}

fn random_amount<R: Rng>(rng: &mut R) -> f64 {
    if rng.gen::<f64>() <= 0.7 {
        rng.gen_range(1_500.0..100_000.0)
    } else {
        rng.gen_range(100_000.0..305_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let svc = NotifierService::new();
        let a = svc.generate_with(&mut StdRng::seed_from_u64(42));
        let b = svc.generate_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_message_shape() {
        let svc = NotifierService::new();
        let notice = svc.generate_with(&mut StdRng::seed_from_u64(7));
        assert!(notice.message.contains(" from "));
        assert!(notice.message.contains(" sum of $"));
        assert!(notice.title.starts_with("Recent "));
        // Two decimal places at the end
        let cents = notice.message.rsplit('.').next().unwrap();
        assert_eq!(cents.len(), 2);
    }

    #[test]
    fn test_amounts_stay_in_range() {
        let svc = NotifierService::new();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let notice = svc.generate_with(&mut rng);
            let amount: f64 = notice
                .message
                .rsplit('$')
                .next()
                .unwrap()
                .parse()
                .unwrap();
            assert!((1_500.0..305_000.0).contains(&amount));
        }
    }
}
