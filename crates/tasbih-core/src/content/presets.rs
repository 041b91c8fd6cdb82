use crate::{
    language::Language,
    model::{CycleStep, Package},
};

struct PresetStep {
    name: [&'static str; 2],
    target: u32,
}

struct Preset {
    id: &'static str,
    title: [&'static str; 2],
    description: [&'static str; 2],
    reference: [&'static str; 2],
    steps: &'static [PresetStep],
}

const SUBHANALLAH: [&str; 2] = [
    "SubhanAllah (سُبْحَانَ اللَّهِ)",
    "সুবহানাল্লাহ (سُبْحَانَ اللَّهِ)",
];
const ALHAMDULILLAH: [&str; 2] = [
    "Alhamdulillah (الْحَمْدُ لِلَّهِ)",
    "আলহামদুলিল্লাহ (الْحَمْدُ لِلَّهِ)",
];
const ALLAHU_AKBAR: [&str; 2] = [
    "Allahu Akbar (اللَّهُ أَكْبَرُ)",
    "আল্লাহু আকবার (اللَّهُ أَكْبَرُ)",
];
const LA_ILAHA_ILLALLAH: [&str; 2] = [
    "La ilaha illallah (لَا إِلٰهَ إِلَّا اللَّهُ)",
    "লা ইলাহা ইল্লাল্লাহ (لَا إِلٰهَ إِلَّا اللَّهُ)",
];
const SUBHANALLAHI_WA_BIHAMDIHI: [&str; 2] = [
    "SubhanAllahi wa bihamdihi (سُبْحَانَ اللَّهِ وَبِحَمْدِهِ)",
    "সুবহানাল্লাহি ওয়া বিহামদিহি (سُبْحَانَ اللَّهِ وَبِحَمْدِهِ)",
];

static PRESETS: [Preset; 10] = [
    Preset {
        id: "salah_post",
        title: ["Post-Salah Dhikr", "সালাত পরবর্তী যিকির"],
        description: [
            "33x SubhanAllah, 33x Alhamdulillah, and 34x Allahu Akbar after Fard prayer.",
            "ফরয নামাযের পর ৩৩ বার সুবহানাল্লাহ, ৩৩ বার আলহামদুলিল্লাহ এবং ৩৪ বার আল্লাহু আকবার।",
        ],
        reference: ["Sahih Muslim: 1242", "সহীহ মুসলিম: ১২৪২"],
        steps: &[
            PresetStep { name: SUBHANALLAH, target: 33 },
            PresetStep { name: ALHAMDULILLAH, target: 33 },
            PresetStep { name: ALLAHU_AKBAR, target: 34 },
        ],
    },
    Preset {
        id: "la_ilaha_illallah_100",
        title: ["Tahlil (100x)", "তাহলীল (১০০ বার)"],
        description: [
            "Reciting \"La ilaha illallah\". It is the best form of remembrance.",
            "“লা ইলাহা ইল্লাল্লাহ” পাঠ। এটি সর্বোত্তম যিকির।",
        ],
        reference: ["Sunan at-Tirmidhi: 3383", "সুনান তিরমিযী: ৩৩৮৩"],
        steps: &[PresetStep { name: LA_ILAHA_ILLALLAH, target: 100 }],
    },
    Preset {
        id: "astaghfirullah_100",
        title: ["Istighfar (100x)", "ইস্তিগফার (১০০ বার)"],
        description: [
            "Seeking forgiveness from Allah. The Prophet (PBUH) used to do this 100 times a day.",
            "আল্লাহর কাছে ক্ষমা প্রার্থনা। রাসূলুল্লাহ (সা.) দিনে ১০০ বার ইস্তিগফার করতেন।",
        ],
        reference: ["Sahih Muslim: 2702", "সহীহ মুসলিম: ২৭০২"],
        steps: &[PresetStep {
            name: [
                "Astaghfirullah (أَسْتَغْفِرُ اللَّهَ)",
                "আস্তাগফিরুল্লাহ (أَسْتَغْفِرُ اللَّهَ)",
            ],
            target: 100,
        }],
    },
    Preset {
        id: "durood_100",
        title: ["Salawat / Durood", "দরুদ শরীফ"],
        description: [
            "Sending blessings upon the Prophet (PBUH). Whoever sends one blessing, Allah sends ten.",
            "রাসূলুল্লাহ (সা.)-এর ওপর দরুদ পাঠ। একবার দরুদ পড়লে আল্লাহ ১০ বার রহমত নাযিল করেন।",
        ],
        reference: ["Sahih Muslim: 408", "সহীহ মুসলিম: ৪০৮"],
        steps: &[PresetStep {
            name: [
                "Sallallahu Alaihi Wasallam (صَلَّى اللَّهُ عَلَيْهِ وَسَلَّمَ)",
                "সাল্লাল্লাহু আলাইহি ওয়াসাল্লাম (صَلَّى اللَّهُ عَلَيْهِ وَسَلَّمَ)",
            ],
            target: 100,
        }],
    },
    Preset {
        id: "morning_evening_100",
        title: ["100x Glorification", "সুবহানাল্লাহি ওয়া বিহামদিহি"],
        description: [
            "Reciting this 100x morning/evening wipes away sins even if they are like sea foam.",
            "সকাল-সন্ধ্যায় ১০০ বার পাঠ করলে সমুদ্রের ফেনা পরিমাণ গুনাহ মাফ হয়।",
        ],
        reference: ["Sahih Bukhari: 6405", "সহীহ বুখারী: ৬৪০৫"],
        steps: &[PresetStep { name: SUBHANALLAHI_WA_BIHAMDIHI, target: 100 }],
    },
    Preset {
        id: "heavy_scales",
        title: ["Heavy on Scales", "মিযানে ভারী যিকির"],
        description: [
            "Two phrases light on the tongue but heavy on the scales.",
            "উচ্চারণে সহজ কিন্তু মিযানে অনেক ভারী আমল।",
        ],
        reference: ["Sahih Bukhari: 7563", "সহীহ বুখারী: ৭৫৬৩"],
        steps: &[
            PresetStep { name: SUBHANALLAHI_WA_BIHAMDIHI, target: 50 },
            PresetStep {
                name: [
                    "SubhanAllahil Azim (سُبْحَانَ اللَّهِ الْعَظِيمِ)",
                    "সুবহানাল্লাহিল আযীম (سُبْحَانَ اللَّهِ الْعَظِيمِ)",
                ],
                target: 50,
            },
        ],
    },
    Preset {
        id: "hasbunallahu_100",
        title: ["Reliance on Allah", "আল্লাহর ওপর ভরসা"],
        description: [
            "Sufficient for us is Allah, and He is the best Disposer of affairs.",
            "আল্লাহই আমাদের জন্য যথেষ্ট এবং তিনিই শ্রেষ্ঠ কর্মবিধায়ক।",
        ],
        reference: ["Quran 3:173", "আল-কুরআন ৩:১৭৩"],
        steps: &[PresetStep {
            name: [
                "Hasbunallahu wa nimal wakil (حَسْبُنَا اللَّهُ وَنِعْمَ الْوَكِيلُ)",
                "হাসবুনাল্লাহু ওয়া নি’মাল ওয়াকীল (حَسْبُنَا اللَّهُ وَنِعْمَ الْوَكِيلُ)",
            ],
            target: 100,
        }],
    },
    Preset {
        id: "sayyidul_istighfar",
        title: ["Sayyidul Istighfar", "সাইয়্যিদুল ইস্তিগফার"],
        description: [
            "The master of all prayers for forgiveness. If recited with conviction and dies, one enters Jannah.",
            "ক্ষমা প্রার্থনার শ্রেষ্ঠ দোয়া। বিশ্বাসের সাথে সকালে পড়ে সন্ধ্যায় মারা গেলে সে জান্নাতি হবে।",
        ],
        reference: ["Sahih Bukhari: 6306", "সহীহ বুখারী: ৬৩০৬"],
        steps: &[PresetStep {
            name: [
                "Sayyidul Istighfar (اللَّهُمَّ أَنْتَ رَبِّي لَا إِلَهَ إِلَّا أَنْتَ)",
                "সাইয়্যিদুল ইস্তিগফার (اللَّهُمَّ أَنْتَ رَبِّي لَا إِلَهَ إِلَّا أَنْتَ)",
            ],
            target: 1,
        }],
    },
    Preset {
        id: "paradise_treasure",
        title: ["Paradise Treasure", "জান্নাতের গুপ্তধন"],
        description: [
            "La hawla wa la quwwata illa billah is a treasure from the treasures of Jannah.",
            "জান্নাতের অন্যতম শ্রেষ্ঠ ভাণ্ডার।",
        ],
        reference: ["Sahih Bukhari: 4205", "সহীহ বুখারী: ৪২০৫"],
        steps: &[PresetStep {
            name: [
                "La hawla wa la quwwata illa billah (لَا حَوْلَ وَلَا قُوَّةَ إِلَّا بِاللَّهِ)",
                "লা হাওলা ওয়ালা কুওয়াতা ইল্লা বিল্লাহ (لَا حَوْلَ وَلَا قُوَّةَ إِلَّا بِاللَّهِ)",
            ],
            target: 100,
        }],
    },
    Preset {
        id: "four_best_words_pkg",
        title: ["Four Beloved Words", "আল্লাহর প্রিয় ৪ বাক্য"],
        description: [
            "The words most beloved to Allah.",
            "আল্লাহর কাছে সবচেয়ে প্রিয় ৪টি বাক্য।",
        ],
        reference: ["Sahih Muslim: 2137", "সহীহ মুসলিম: ২১৩৭"],
        steps: &[
            PresetStep { name: SUBHANALLAH, target: 25 },
            PresetStep { name: ALHAMDULILLAH, target: 25 },
            PresetStep { name: LA_ILAHA_ILLALLAH, target: 25 },
            PresetStep { name: ALLAHU_AKBAR, target: 25 },
        ],
    },
];

impl Preset {
    fn to_package(&self, language: Language) -> Package {
        let row = language.index();
        Package {
            id: self.id.to_owned(),
            title: self.title[row].to_owned(),
            description: self.description[row].to_owned(),
            reference: Some(self.reference[row].to_owned()),
            cycles: self
                .steps
                .iter()
                .map(|step| CycleStep::new(step.name[row], step.target))
                .collect(),
        }
    }
}

/// Id of the package used when nothing valid is persisted.
pub fn default_package_id() -> &'static str {
    PRESETS[0].id
}

/// Built-in packages in catalog order, labelled for `language`.
pub fn list_packages(language: Language) -> Vec<Package> {
    PRESETS
        .iter()
        .map(|preset| preset.to_package(language))
        .collect()
}

pub fn find_package(language: Language, id: &str) -> Option<Package> {
    PRESETS
        .iter()
        .find(|preset| preset.id == id)
        .map(|preset| preset.to_package(language))
}

pub fn default_package(language: Language) -> Package {
    PRESETS[0].to_package(language)
}
