use crate::language::Language;

/// One supplication from the dua library.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DuaItem {
    pub id: u16,
    pub arabic: &'static str,
    pub translation: &'static str,
    pub reference: &'static str,
    pub benefit: &'static str,
    pub verified: bool,
}

/// Which part of a dua gets copied.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DuaPart {
    Arabic,
    Translation,
}

impl DuaItem {
    pub fn part(&self, part: DuaPart) -> &'static str {
        match part {
            DuaPart::Arabic => self.arabic,
            DuaPart::Translation => self.translation,
        }
    }
}

struct DuaEntry {
    id: u16,
    arabic: &'static str,
    translation: [&'static str; 2],
    reference: [&'static str; 2],
    benefit: [&'static str; 2],
}

static DUAS: [DuaEntry; 12] = [
    DuaEntry {
        id: 1,
        arabic: "رَبَّنَا آتِنَا فِي الدُّنْيَا حَسَنَةً وَفِي الْآخِرَةِ حَسَنَةً وَقِنَا عَذَابَ النَّارِ",
        translation: [
            "Our Lord, give us in this world [that which is] good and in the Hereafter [that which is] good and protect us from the punishment of the Fire.",
            "হে আমাদের প্রতিপালক! আমাদের দুনিয়াতেও কল্যাণ দিন এবং আখেরাতেও কল্যাণ দিন এবং আমাদের আগুনের (জাহান্নামের) আযাব থেকে রক্ষা করুন।",
        ],
        reference: ["Quran 2:201", "আল-কুরআন ২:২০১"],
        benefit: ["Success in both worlds", "দুনিয়া ও আখেরাতের কল্যাণ"],
    },
    DuaEntry {
        id: 2,
        arabic: "لَا إِلَهَ إِلَّا أَنْتَ سُبْحَانَكَ إِنِّي كُنْتُ مِنَ الظَّالِمِينَ",
        translation: [
            "There is no deity except You; exalted are You. Indeed, I have been of the wrongdoers.",
            "আপনি ব্যতীত কোনো সত্য ইলাহ নেই; আপনি অতি পবিত্র। নিশ্চয়ই আমি জালিমদের (অপরাধীদের) অন্তর্ভুক্ত ছিলাম।",
        ],
        reference: ["Quran 21:87", "আল-কুরআন ২১:৮৭"],
        benefit: ["Relief from distress", "বিপদ ও দুশ্চিন্তা থেকে মুক্তি"],
    },
    DuaEntry {
        id: 3,
        arabic: "رَبَّنَا لَا تُزِغْ قُلُوبَنَا بَعْدَ إِذْ هَدَيْتَنَا وَهَبْ لَنَا مِنْ لَدُنْكَ رَحْمَةً إِنَّكَ أَنْتَ الْوَهَّابُ",
        translation: [
            "Our Lord, let not our hearts deviate after You have guided us and grant us from Yourself mercy. Indeed, You are the Bestower.",
            "হে আমাদের প্রতিপালক! সরল পথ প্রদর্শনের পর আমাদের অন্তরকে সত্যলঙ্ঘনে প্রবৃত্ত করবেন না এবং আপনার পক্ষ থেকে আমাদের রহমত দান করুন। নিশ্চয়ই আপনি পরম দাতা।",
        ],
        reference: ["Quran 3:8", "আল-কুরআন ৩:৮"],
        benefit: ["Steadfastness in faith", "ঈমানের ওপর অটল থাকা"],
    },
    DuaEntry {
        id: 4,
        arabic: "رَبِّ اغْفِرْ وَارْحَمْ وَأَنْتَ خَيْرُ الرَّاحِمِينَ",
        translation: [
            "My Lord, forgive and have mercy, and You are the best of the merciful.",
            "হে আমার প্রতিপালক! ক্ষমা করুন ও রহম করুন; আর আপনিই তো সর্বশ্রেষ্ঠ দয়ালু।",
        ],
        reference: ["Quran 23:118", "আল-কুরআন ২৩:১১৮"],
        benefit: ["Mercy and forgiveness", "ক্ষমা ও রহমত প্রার্থনা"],
    },
    DuaEntry {
        id: 5,
        arabic: "رَبَّنَا ظَلَمْنَا أَنْفُسَنَا وَإِنْ لَمْ تَغْفِرْ لَنَا وَتَرْحَمْنَا لَنَكُونَنَّ مِنَ الْخَاسِرِينَ",
        translation: [
            "Our Lord, we have wronged ourselves, and if You do not forgive us and have mercy upon us, we will surely be among the losers.",
            "হে আমাদের প্রতিপালক! আমরা নিজেদের প্রতি জুলুম করেছি। আপনি যদি আমাদের ক্ষমা না করেন এবং আমাদের প্রতি দয়া না করেন, তবে অবশ্যই আমরা ক্ষতিগ্রস্তদের অন্তর্ভুক্ত হব।",
        ],
        reference: ["Quran 7:23", "আল-কুরআন ৭:২৩"],
        benefit: ["Repentance (Tawbah)", "ক্ষমা ও তওবা কবুল"],
    },
    DuaEntry {
        id: 6,
        arabic: "رَبِّ ارْحَمْهُمَا كَمَا رَبَّيَانِي صَغِيرًا",
        translation: [
            "My Lord, have mercy upon them as they brought me up [when I was] small.",
            "হে আমার প্রতিপালক! আপনি তাদের (পিতামাতার) প্রতি দয়া করুন, যেভাবে তারা আমাকে শৈশবে লালন-পালন করেছেন।",
        ],
        reference: ["Quran 17:24", "আল-কুরআন ১৭:২৪"],
        benefit: ["For parents", "পিতামাতার জন্য দোয়া"],
    },
    DuaEntry {
        id: 7,
        arabic: "يَا مُقَلِّبَ الْقُلُوبِ ثَبِّتْ قَلْبِي عَلَى دِينِكَ",
        translation: [
            "O Turner of the hearts, keep my heart steadfast upon Your religion.",
            "হে অন্তরসমূহের পরিবর্তনকারী! আমার অন্তরকে আপনার দ্বীনের ওপর অটল রাখুন।",
        ],
        reference: ["Sunan at-Tirmidhi: 3522", "সুনান তিরমিযী: ৩৫২২"],
        benefit: ["Spiritual steadfastness", "দ্বীনের ওপর অটল থাকা"],
    },
    DuaEntry {
        id: 8,
        arabic: "اللَّهُمَّ إِنِّي أَعُوذُ بِكَ مِنَ الْهَمِّ وَالْحَزَنِ وَالْعَجْزِ وَالْكَسَلِ وَالْبُخْلِ وَالْجُبْنِ وَضَلَعِ الدَّيْنِ وَغَلَبَةِ الرِّجَالِ",
        translation: [
            "O Allah, I seek refuge in You from anxiety and sorrow, weakness and laziness, miserliness and cowardice, the burden of debts and from being overpowered by men.",
            "হে আল্লাহ! আমি আপনার আশ্রয় নিচ্ছি দুশ্চিন্তা ও দুঃখ থেকে, অক্ষমতা ও অলসতা থেকে, কৃপণতা ও ভীরুতা থেকে, ঋণের বোঝা ও মানুষের প্রাবল্য (জবরদস্তি) থেকে।",
        ],
        reference: ["Sahih al-Bukhari: 2893", "সহীহ বুখারী: ২৮৯৩"],
        benefit: ["Relief from anxiety and debt", "দুশ্চিন্তা ও ঋণ থেকে মুক্তি"],
    },
    DuaEntry {
        id: 9,
        arabic: "اللَّهُمَّ إِنِّي أَسْأَلُكَ الْعَفْوَ وَالْعَافِيَةَ فِي الدُّنْيَا وَالْآخِرَةِ",
        translation: [
            "O Allah, I ask You for forgiveness and well-being in this world and the Hereafter.",
            "হে আল্লাহ! আমি আপনার কাছে দুনিয়া ও আখেরাতে ক্ষমা ও নিরাপত্তা (আফিয়াত) প্রার্থনা করছি।",
        ],
        reference: ["Sunan Abu Dawood: 5074", "সুনান আবু দাউদ: ৫০৭৪"],
        benefit: ["Safety and well-being", "নিরাপত্তা ও আফিয়াত লাভ"],
    },
    DuaEntry {
        id: 17,
        arabic: "رَبِّ زِدْنِي عِلْمًا",
        translation: [
            "My Lord, increase me in knowledge.",
            "হে আমার প্রতিপালক, আমার জ্ঞান বৃদ্ধি করে দিন।",
        ],
        reference: ["Quran 20:114", "আল-কুরআন ২০:১১৪"],
        benefit: ["Seeking knowledge", "ইলম বা জ্ঞান বৃদ্ধি"],
    },
    DuaEntry {
        id: 19,
        arabic: "اللَّهُمَّ أَعِنِّي عَلَى ذِكْرِكَ وَشُكْرِكَ وَحُسْنِ عِبَادَتِكَ",
        translation: [
            "O Allah, help me to remember You, to give thanks to You, and to worship You in the best manner.",
            "হে আল্লাহ! আপনার জিকর করতে, আপনার শোকর আদায় করতে এবং আপনার সুন্দর ইবাদত করতে আমাকে সাহায্য করুন।",
        ],
        reference: ["Sunan Abu Dawood: 1522", "সুনান আবু দাউদ: ১৫২২"],
        benefit: ["Help in worship", "ইবাদত ও শুকরিয়ায় সাহায্য লাভ"],
    },
    DuaEntry {
        id: 20,
        arabic: "بِاسْمِكَ اللَّهُمَّ أَمُوتُ وَأَحْيَا",
        translation: [
            "In Your Name, O Allah, I die and I live.",
            "হে আল্লাহ! আপনারই নামে আমি মরি এবং আপনারই নামে আমি জীবিত হই (জাগ্রত হই)।",
        ],
        reference: ["Sahih al-Bukhari: 6312", "সহীহ বুখারী: ৬৩১২"],
        benefit: ["Before sleeping", "ঘুমানোর আগের দোয়া"],
    },
];

impl DuaEntry {
    fn to_item(&self, language: Language) -> DuaItem {
        let row = language.index();
        DuaItem {
            id: self.id,
            arabic: self.arabic,
            translation: self.translation[row],
            reference: self.reference[row],
            benefit: self.benefit[row],
            verified: true,
        }
    }
}

pub fn list_duas(language: Language) -> Vec<DuaItem> {
    DUAS.iter().map(|entry| entry.to_item(language)).collect()
}

pub fn find_dua(language: Language, id: u16) -> Option<DuaItem> {
    DUAS.iter()
        .find(|entry| entry.id == id)
        .map(|entry| entry.to_item(language))
}
