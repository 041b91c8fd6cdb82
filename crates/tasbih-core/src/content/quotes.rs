use rand::Rng;

use crate::{language::Language, text_policy::strip_wrapping_quotes};

/// Short hadith shown above the counter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Quote {
    pub text: &'static str,
    pub reference: &'static str,
}

impl Quote {
    const fn new(text: &'static str, reference: &'static str) -> Self {
        Self { text, reference }
    }

    pub fn display_text(&self) -> &'static str {
        strip_wrapping_quotes(self.text)
    }
}

const QUOTES_EN: [Quote; 15] = [
    Quote::new("The example of the one who remembers his Lord and the one who does not is like the living and the dead.", "Sahih Bukhari"),
    Quote::new("Should I not inform you of the best of your deeds? It is the remembrance of Allah.", "Tirmidhi"),
    Quote::new("Two phrases are light on the tongue but heavy in the balance: SubhanAllahi wa bihamdihi, SubhanAllahil Azim.", "Sahih Bukhari"),
    Quote::new("He who says, 'SubhanAllahi wa bihamdihi' 100 times a day, his sins will be forgiven even if they were like the foam of the sea.", "Sahih Bukhari"),
    Quote::new("If your hearts were always as they are when you are with me, the angels would shake hands with you.", "Sahih Muslim"),
    Quote::new("Allah says: I am as My servant thinks I am. I am with him when he makes mention of Me.", "Sahih Bukhari"),
    Quote::new("Keep your tongue moist with the remembrance of Allah.", "Tirmidhi"),
    Quote::new("The mufarridun have gone ahead. They are those who remember Allah much.", "Sahih Muslim"),
    Quote::new("No people sit in a gathering remembering Allah but the angels surround them and mercy covers them.", "Sahih Muslim"),
    Quote::new("When you pass by the meadows of Paradise, graze there. They are the circles of dhikr.", "Tirmidhi"),
    Quote::new("The most beloved words to Allah are four: SubhanAllah, Alhamdulillah, La ilaha illallah, Allahu Akbar.", "Sahih Muslim"),
    Quote::new("Everything in the world is cursed except the remembrance of Allah and what supports it.", "Tirmidhi"),
    Quote::new("For everything there is a polish, and the polish for the hearts is the remembrance of Allah.", "Bayhaqi"),
    Quote::new("Whoever says 'La ilaha illallah wahdahu la sharika lah...' 100 times, it is like freeing 10 slaves.", "Sahih Bukhari"),
    Quote::new("There is no deed that is better for saving a person from the punishment of Allah than the remembrance of Allah.", "Ahmad"),
];

const QUOTES_BN: [Quote; 15] = [
    Quote::new("যে ব্যক্তি তার রবের যিকির করে আর যে করে না, তাদের উদাহরণ হলো জীবিত ও মৃতর মতো।", "সহীহ বুখারী"),
    Quote::new("আমি কি তোমাদের সর্বোত্তম আমল সম্পর্কে বলব না? তা হলো আল্লাহর যিকির।", "তিরমিযী"),
    Quote::new("উচ্চারণে সহজ কিন্তু মিযানে অনেক ভারী আমল: সুবহানাল্লাহি ওয়া বিহামদিহি, সুবহানাল্লাহিল আযীম।", "সহীহ বুখারী"),
    Quote::new("যে ব্যক্তি দিনে ১০০ বার 'সুবহানাল্লাহি ওয়া বিহামদিহি' পড়বে, তার সমস্ত গুনাহ মাফ করা হবে, যদিও তা সমুদ্রের ফেনার মতো হয়।", "সহীহ বুখারী"),
    Quote::new("তোমাদের অবস্থা যদি সর্বদা তেমন থাকত যেমন আমার কাছে থাকাকালীন থাকে, তবে ফেরেশতারা তোমাদের সাথে মুসাফাহা করত।", "সহীহ মুসলিম"),
    Quote::new("আল্লাহ বলেন: আমার বান্দা আমার প্রতি যেমন ধারণা রাখে আমি তেমনই। সে যখন আমাকে স্মরণ করে আমি তার সাথেই থাকি।", "সহীহ বুখারী"),
    Quote::new("তোমার জিহ্বা যেন সর্বদা আল্লাহর যিকিরে সিক্ত থাকে।", "তিরমিযী"),
    Quote::new("মুফারিদগণ অগ্রগামী হয়ে গেছে। তারা হলো সেই সব লোক যারা আল্লাহকে অধিক স্মরণকারী।", "সহীহ মুসলিম"),
    Quote::new("যখনই কোনো সম্প্রদায় আল্লাহর যিকিরে বসে, ফেরেশতারা তাদের ঘিরে রাখে এবং রহমত তাদের ঢেকে নেয়।", "সহীহ মুসলিম"),
    Quote::new("যখন তোমরা জান্নাতের বাগানের পাশ দিয়ে যাও তখন সেখান থেকে ফল আহরণ করো। জান্নাতের বাগান হলো যিকিরের মজলিস।", "তিরমিযী"),
    Quote::new("আল্লাহর কাছে সবচেয়ে প্রিয় বাক্য ৪টি: সুবহানাল্লাহ, আলহামদুলিল্লাহ, লা ইলাহা ইল্লাল্লাহ, আল্লাহু আকবার।", "সহীহ মুসলিম"),
    Quote::new("দুনিয়ার সবকিছুই অভিশপ্ত, তবে আল্লাহর যিকির এবং তার সহযোগী বিষয়গুলো ছাড়া।", "তিরমিযী"),
    Quote::new("প্রত্যেক জিনিসেরই একটি পলিশ থাকে, আর অন্তরের পলিশ হলো আল্লাহর যিকির।", "বায়হাকী"),
    Quote::new("যে ব্যক্তি দিনে ১০০ বার 'লা ইলাহা ইল্লাল্লাহু ওয়াহদাহু...' পাঠ করবে, সে ১০টি গোলাম আযাদ করার সওয়াব পাবে।", "সহীহ বুখারী"),
    Quote::new("আল্লাহর আযাব থেকে মানুষকে বাঁচাতে আল্লাহর যিকিরের চেয়ে কার্যকর আর কোনো আমল নেই।", "মুসনাদে আহমাদ"),
];

const QUOTES: [&[Quote]; 2] = [&QUOTES_EN, &QUOTES_BN];

static MOTIVATIONS: [[&str; 10]; 2] = [
    [
        "MashaAllah! May Allah accept your dhikr.",
        "Excellent! Keep your tongue moist with the remembrance of Allah.",
        "Beautiful! Every dhikr is a step closer to Paradise.",
        "Great job! The best of deeds is the constant remembrance of Allah.",
        "Alhamdulillah! You've successfully completed this package.",
        "Stay consistent, for Allah loves the most regular of deeds.",
        "Your heart finds peace in the remembrance of Allah. Keep going!",
        "Dhikr is the polish that removes the rust from the heart.",
        "MashaAllah! You are investing in your eternal home.",
        "May this dhikr bring barakah and light into your life.",
    ],
    [
        "মাশাআল্লাহ! আল্লাহ আপনার যিকির কবুল করুন।",
        "চমৎকার! আল্লাহর স্মরণে আপনার জিহ্বাকে সবসময় সিক্ত রাখুন।",
        "সুবহানাল্লাহ! প্রতিটি যিকির আপনাকে জান্নাতের এক ধাপ কাছে নিয়ে যায়।",
        "অসাধারণ কাজ! সর্বোত্তম আমল হলো আল্লাহর নিয়মিত যিকির করা।",
        "আলহামদুলিল্লাহ! আপনি সফলভাবে এই প্যাকেজটি সম্পন্ন করেছেন।",
        "ধারাবাহিকতা বজায় রাখুন, কারণ নিয়মিত আমল আল্লাহর কাছে প্রিয়।",
        "আল্লাহর জিকিরেই অন্তরের প্রশান্তি। এগিয়ে চলুন!",
        "যিকির হলো অন্তরের মরিচা দূর করার শ্রেষ্ঠ উপায়।",
        "মাশাআল্লাহ! আপনি আপনার আখেরাতের জন্য শ্রেষ্ঠ বিনিয়োগ করছেন।",
        "এই যিকির আপনার জীবনে বরকত ও নূর বয়ে আনুক।",
    ],
];

pub fn quotes(language: Language) -> &'static [Quote] {
    QUOTES[language.index()]
}

pub fn motivations(language: Language) -> &'static [&'static str] {
    &MOTIVATIONS[language.index()]
}

/// Uniformly random quote; repeats are allowed.
pub fn random_quote<R: Rng + ?Sized>(language: Language, rng: &mut R) -> Quote {
    let table = quotes(language);
    table[rng.gen_range(0..table.len())]
}

/// Uniformly random completion message; repeats are allowed.
pub fn random_motivation<R: Rng + ?Sized>(language: Language, rng: &mut R) -> &'static str {
    let table = motivations(language);
    table[rng.gen_range(0..table.len())]
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn selection_is_deterministic_for_a_fixed_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(
                random_quote(Language::En, &mut a),
                random_quote(Language::En, &mut b)
            );
            assert_eq!(
                random_motivation(Language::Bn, &mut a),
                random_motivation(Language::Bn, &mut b)
            );
        }
    }

    #[test]
    fn selection_stays_within_the_language_table() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let quote = random_quote(Language::Bn, &mut rng);
            assert!(quotes(Language::Bn).contains(&quote));
            let message = random_motivation(Language::En, &mut rng);
            assert!(motivations(Language::En).contains(&message));
        }
    }

    #[test]
    fn tables_line_up_across_languages() {
        assert_eq!(quotes(Language::En).len(), quotes(Language::Bn).len());
        assert_eq!(motivations(Language::En).len(), motivations(Language::Bn).len());
    }
}
