//! The immutable language registry: bidirectional lookup between language
//! codes and the items representing languages.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::error::{IdError, IdResult};
use crate::id::Qid;
use crate::language::Language;

/// Immutable lookup table over [`Language`] records with a forward index
/// (code → languages) and a reverse index (item → languages), both built
/// once at construction.
///
/// A code may map to several languages and several codes may share one item,
/// so every lookup returns all matches in table order.
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    by_code: HashMap<String, Vec<usize>>,
    by_item: HashMap<Qid, Vec<usize>>,
}

impl LanguageRegistry {
    /// Build a registry from the given records.
    pub fn new(languages: Vec<Language>) -> Self {
        let mut by_code: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_item: HashMap<Qid, Vec<usize>> = HashMap::new();
        for (i, language) in languages.iter().enumerate() {
            by_code
                .entry(language.code().to_string())
                .or_default()
                .push(i);
            by_item.entry(language.item().clone()).or_default().push(i);
        }
        Self {
            languages,
            by_code,
            by_item,
        }
    }

    /// The table of languages usable on Wikimedia projects as termbox,
    /// monolingual-text, or lexeme language codes.
    pub fn wikidata() -> Self {
        let languages = WIKIDATA_LANGUAGES
            .iter()
            .map(|(code, item)| {
                let item = Qid::new(*item).expect("static language table holds valid item ids");
                Language::new(*code, item)
            })
            .collect();
        Self::new(languages)
    }

    /// All languages registered under `code`, in table order.
    pub fn by_code(&self, code: &str) -> Vec<&Language> {
        self.resolve(self.by_code.get(code))
    }

    /// All languages whose item is `item`, in table order.
    pub fn by_item(&self, item: &Qid) -> Vec<&Language> {
        self.resolve(self.by_item.get(item))
    }

    /// Item-or-code lookup: a valid `Q…` string resolves through the
    /// reverse index, anything else through the code index.
    pub fn find(&self, key: &str) -> Vec<&Language> {
        match Qid::new(key) {
            Ok(item) => self.by_item(&item),
            Err(_) => self.by_code(key),
        }
    }

    /// The first language registered under the given code or item id.
    pub fn first(&self, key: &str) -> IdResult<&Language> {
        self.find(key)
            .into_iter()
            .next()
            .ok_or_else(|| IdError::UnknownLanguage(key.to_string()))
    }

    /// Number of registered languages.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Returns `true` if the registry holds no languages.
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// All registered languages in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.languages.iter()
    }

    fn resolve(&self, indices: Option<&Vec<usize>>) -> Vec<&Language> {
        indices
            .map(|ids| ids.iter().map(|&i| &self.languages[i]).collect())
            .unwrap_or_default()
    }
}

lazy_static! {
    static ref WIKIDATA: LanguageRegistry = LanguageRegistry::wikidata();
}

/// The process-wide default registry, built on first use from the Wikidata
/// table. Components that need a different table construct and pass their
/// own [`LanguageRegistry`]; nothing in the toolkit requires this instance.
pub fn registry() -> &'static LanguageRegistry {
    &WIKIDATA
}

/// `(code, item)` pairs for the default table.
/// (Codes sharing an item are scripts,
/// regional variants, or `mis`-style catch-alls.)
const WIKIDATA_LANGUAGES: &[(&str, &str)] = &[
    ("mul", "Q20923490"), // multiple languages -- export using this to Wikidata might fail
    ("zxx", "Q22282939"), // no linguistic content
    ("mis", "Q22283016"), // language without a specific language code
    ("und", "Q22283016"), // undetermined language
    ("bn", "Q9610"), // Bengali
    ("ctg", "Q33173"), // Chittagonian
    ("rkt", "Q3241618"), // Rangpuri
    ("syl", "Q2044560"), // Sylheti
    ("ccp", "Q32952"), // Chakma
    ("rhg-rohg", "Q3241177"), // Rohingya
    ("as", "Q29401"), // Assamese
    ("or", "Q33810"), // Odia
    ("bho", "Q33268"), // Bhojpuri
    ("en", "Q1860"), // English
    ("es", "Q1321"), // Spanish
    ("fr", "Q150"), // French
    ("ru", "Q7737"), // Russian
    ("ar", "Q13955"), // Arabic (Modern Standard)
    ("zh", "Q9192"), // Mandarin Chinese
    ("bg", "Q7918"), // Bulgarian
    ("cs", "Q9056"), // Czech
    ("da", "Q9035"), // Danish
    ("de", "Q188"), // German
    ("el", "Q36510"), // Greek
    ("et", "Q9072"), // Estonian
    ("fi", "Q1412"), // Finnish
    ("ga", "Q9142"), // Irish
    ("hu", "Q9067"), // Hungarian
    ("it", "Q652"), // Italian
    ("lt", "Q9083"), // Lithuanian
    ("lv", "Q9078"), // Latvian
    ("mt", "Q9166"), // Maltese
    ("nl", "Q7411"), // Dutch
    ("pl", "Q809"), // Polish
    ("pt", "Q5146"), // Portuguese
    ("ro", "Q7913"), // Romanian
    ("sk", "Q9058"), // Slovak
    ("sl", "Q9063"), // Slovene
    ("sv", "Q9027"), // Swedish
    ("gu", "Q5137"), // Gujarati
    ("hi", "Q11051"), // Hindustani (deva)
    ("kn", "Q33673"), // Kannada
    ("ks-deva", "Q33552"), // Kashmiri
    ("ks-arab", "Q33552"),
    ("gom-deva", "Q5575236"), // Goan Konkani
    ("gom-latn", "Q5575236"),
    ("mai", "Q36109"), // Maithili
    ("ml", "Q36236"), // Malayalam
    ("mni", "Q33868"), // Meitei
    ("mr", "Q1571"), // Marathi
    ("ne", "Q33823"), // Nepali
    ("pa", "Q58635"), // Punjabi (guru)
    ("pnb", "Q58635"), // Punjabi (aran)
    ("sa", "Q11059"), // Sanskrit
    ("sat", "Q33965"), // Santali (olck)
    ("sat-beng", "Q33965"), // Santali
    ("sat-latn", "Q33965"), // Santali
    ("sat-orya", "Q33965"), // Santali
    ("sd", "Q33997"), // Sindhi (aran)
    ("ta", "Q5885"), // Tamil
    ("te", "Q8097"), // Telugu
    ("ur", "Q11051"), // Hindustani (aran)
    ("is", "Q294"), // Icelandic
    ("nb", "Q25167"), // Bokmål
    ("nn", "Q25164"), // Nynorsk
    ("kl", "Q25355"), // Kalaallisut
    ("fo", "Q25258"), // Faroese
    ("sjd", "Q33656"), // Kildin Sami
    ("se", "Q33947"), // Northern Sami
    ("smn", "Q33462"), // Inari Sami
    ("sms", "Q13271"), // Skolt Sami
    ("smj", "Q56322"), // Lule Sami
    ("sje", "Q56314"), // Pite Sami
    ("sju", "Q56415"), // Ume Sami
    ("sma", "Q13293"), // Southern Sami
    ("af", "Q14196"), // Afrikaans
    ("ast", "Q29507"), // Asturian
    ("az", "Q9292"), // Azerbaijani
    ("ba", "Q13389"), // Bashkir
    ("bar", "Q29540"), // Bavarian
    ("be", "Q9091"), // Belarusian
    ("be-tarask", "Q9091"), // Taraskievica
    ("br", "Q12107"), // Breton
    ("ca", "Q7026"), // Catalan
    ("cy", "Q9309"), // Welsh
    ("dag", "Q32238"), // Dagbani
    ("dsb", "Q13286"), // Lower Sorbian
    ("de-at", "Q306626"), // Austrian German
    ("de-ch", "Q387066"), // Swiss German
    ("en-gb", "Q7979"), // British English
    ("eo", "Q143"), // Esperanto
    ("eu", "Q8752"), // Basque
    ("fa", "Q9168"), // Persian
    ("fy", "Q27175"), // West Frisian
    ("gd", "Q9314"), // Scottish Gaelic
    ("gl", "Q9307"), // Galician
    ("gn", "Q35876"), // Guarani
    ("ha", "Q56475"), // Hausa
    ("ha-arab", "Q56475"), // Hausa
    ("he", "Q9288"), // Hebrew
    ("hsb", "Q13248"), // Upper Sorbian
    ("hy", "Q8785"), // Armenian
    ("ig", "Q33578"), // Igbo
    ("io", "Q35224"), // Ido
    ("ja", "Q5287"), // Japanese
    ("jv", "Q33549"), // Javanese
    ("ka", "Q8108"), // Georgian
    ("kk", "Q9252"), // Kazakh
    ("ko", "Q9176"), // Korean
    ("kw", "Q25289"), // Cornish
    ("la", "Q397"), // Latin
    ("lb", "Q9051"), // Luxembourgish
    ("lfn", "Q146803"), // Lingua Franca Nova
    ("mk", "Q9296"), // Macedonian
    ("ms", "Q9237"), // Malay
    ("ms-arab", "Q9237"), // Malay (Jawi)
    ("myv", "Q29952"), // Erzya
    ("nan", "Q36495"), // Southern Min
    ("nqo", "Q35772"), // Manding languages
    ("oc", "Q14185"), // Occitan
    ("olo", "Q36584"), // Livvi-Karelian
    ("pi", "Q36727"), // Pali
    ("ps", "Q58680"), // Pashto
    ("pt-br", "Q750553"), // Brazilian Portuguese
    ("pwn", "Q715755"), // Paiwan
    ("rm", "Q13199"), // Romansh
    ("scn", "Q33973"), // Sicilian
    ("sco", "Q14549"), // Scots
    ("sq", "Q8748"), // Albanian
    ("ss", "Q34014"), // Swazi
    ("tg", "Q9260"), // Tajik
    ("th", "Q9217"), // Thai
    ("tr", "Q256"), // Turkish
    ("tw", "Q36850"), // Twi
    ("udm", "Q13238"), // Udmurt
    ("uk", "Q8798"), // Ukrainian
    ("vep", "Q32747"), // Veps
    ("vi", "Q9199"), // Vietnamese
    ("vmf", "Q71223"), // East Franconian
    ("vo", "Q36986"), // Volapuk
    ("wa", "Q34219"), // Walloon
    ("no", "Q9043"), // Norwegian
    ("zh-classical", "Q37041"), // Classical Chinese
    ("zh-min-nan", "Q36495"), // Chinese (Min Nan)
    ("zh-yue", "Q7033959"), // Cantonese
    ("aeb", "Q56240"), // Tunisian
    ("aeb-arab", "Q56240"), // Tunisian
    ("aeb-latn", "Q56240"), // Tunisian
    ("arq", "Q56499"), // Algerian
    ("ary", "Q56426"), // Moroccan
    ("arz", "Q29919"), // Egyptian
    ("bs", "Q9303"), // Bosnian
    ("hr", "Q6654"), // Croatian
    ("sh", "Q9301"), // Serbo-Croatian
    ("sr", "Q9299"), // Serbian
    ("sr-ec", "Q9299"), // Serbian written in Cyrillic
    ("sr-el", "Q9299"), // Serbian (Latin script)
    ("id", "Q9240"), // Indonesian
    ("zh-cn", "Q9192"), // Mandarin (Mainland)
    ("zh-hans", "Q9192"), // Mandarin (Simplified)
    ("zh-hant", "Q9192"), // Mandarin (Traditional)
    ("zh-hk", "Q9192"), // Chinese (Hong Kong)
    ("zh-mo", "Q9192"), // Chinese (Macau)
    ("zh-my", "Q9192"), // Chinese (Malaysia)
    ("zh-sg", "Q9192"), // Chinese (Singapore)
    ("zh-tw", "Q9192"), // Mandarin (Taiwan)
    ("aa", "Q27811"), // Afar
    ("ab", "Q5111"), // Abkhazian
    ("abs", "Q3124354"), // Ambonese Malay
    ("ace", "Q27683"), // Achinese
    ("ady", "Q27776"), // Adyghe
    ("ady-cyrl", "Q27776"), // Adyghe (Cyrillic script)
    ("agq", "Q34737"), // Aghem
    ("ak", "Q28026"), // Akan
    ("aln", "Q181037"), // Gheg Albanian
    ("als", "Q131339"), // Alemannisch
    ("alt", "Q1991779"), // Southern Altai
    ("am", "Q28244"), // Amharic
    ("ami", "Q35132"), // Amis
    ("an", "Q8765"), // Aragonese
    ("ang", "Q42365"), // Old English
    ("anp", "Q28378"), // Angika
    ("arc", "Q28602"), // Aramaic
    ("arn", "Q33730"), // Mapuche
    ("ase", "Q14759"), // American Sign Language
    ("atj", "Q56590"), // Atikamekw
    ("av", "Q29561"), // Avaric
    ("avk", "Q1377116"), // Kotava
    ("awa", "Q29579"), // Awadhi
    ("ay", "Q4627"), // Aymara
    ("azb", "Q9292"), // South Azerbaijani
    ("bag", "Q36621"), // Tuki
    ("ban", "Q33070"), // Balinese
    ("ban-bali", "Q33070"), // ᬩᬲᬩᬮᬶ
    ("bas", "Q33093"), // Basaa
    ("bat-smg", "Q213434"), // Samogitian
    ("bax", "Q35280"), // Bamun
    ("bbc", "Q33017"), // Batak Toba
    ("bbc-latn", "Q33017"), // Batak Toba (Latin script)
    ("bbj", "Q35271"), // Ghomala
    ("bcc", "Q12634001"), // Southern Balochi
    ("bcl", "Q33284"), // Central Bikol
    ("be-x-old", "Q9091"), // Belarusian (Taraškievica orthography)
    ("bgn", "Q12645561"), // Western Balochi
    ("bh", "Q33268"), // Bhojpuri
    ("bi", "Q35452"), // Bislama
    ("bjn", "Q33151"), // Banjar
    ("bkc", "Q34905"), // Baka
    ("bkh", "Q34866"), // Bakako
    ("bkm", "Q1656595"), // Kom
    ("bm", "Q33243"), // Bambara
    ("bo", "Q34271"), // Tibetan
    ("bpy", "Q37059"), // Bishnupriya
    ("bqi", "Q257829"), // Bakhtiari
    ("brh", "Q33202"), // Brahui
    ("btm", "Q2891049"), // Batak Mandailing
    ("bto", "Q12633026"), // Iriga Bicolano
    ("bug", "Q33190"), // Buginese
    ("bxr", "Q16116629"), // Russia Buriat
    ("byv", "Q36019"), // Medumba
    ("cak", "Q35115"), // Kaqchikel
    ("cbk-zam", "Q33281"), // Chavacano
    ("cdo", "Q36455"), // Min Dong Chinese
    ("ce", "Q33350"), // Chechen
    ("ceb", "Q33239"), // Cebuano
    ("ch", "Q33262"), // Chamorro
    ("cho", "Q32979"), // Choctaw
    ("chr", "Q33388"), // Cherokee
    ("chy", "Q33265"), // Cheyenne
    ("ckb", "Q36811"), // Central Kurdish
    ("co", "Q33111"), // Corsican
    ("cps", "Q2937525"), // Capiznon
    ("cr", "Q33390"), // Cree
    ("crh", "Q33357"), // Crimean Tatar
    ("crh-cyrl", "Q33357"), // Crimean Tatar (Cyrillic script)
    ("crh-latn", "Q33357"), // Crimean Tatar (Latin script)
    ("csb", "Q33690"), // Kashubian
    ("cu", "Q35499"), // Church Slavic
    ("cv", "Q33348"), // Chuvash
    ("de-1901", "Q188"), // German (1901 to 1996)
    ("de-formal", "Q188"), // German (formal address)
    ("din", "Q56466"), // Dinka
    ("diq", "Q10199"), // Zazaki
    ("dtp", "Q5317225"), // Central Dusun
    ("dty", "Q18415595"), // Doteli
    ("dua", "Q33013"), // Duala
    ("dv", "Q32656"), // Divehi
    ("dz", "Q33081"), // Dzongkha
    ("ee", "Q30005"), // Ewe
    ("egl", "Q1057898"), // Emilian
    ("eml", "Q242648"), // Emiliano-Romagnolo
    ("en-ca", "Q44676"), // Canadian English
    ("en-us", "Q7976"), // American English
    ("es-419", "Q56649449"), // Latin American Spanish
    ("es-formal", "Q1321"), // Spanish (formal address)
    ("eto", "Q35317"), // Eton
    ("etu", "Q35296"), // Ejagham
    ("ewo", "Q35459"), // Ewondo
    ("ext", "Q30007"), // Extremaduran
    ("ff", "Q33454"), // Fulah
    ("fit", "Q13357"), // Tornedalen Finnish
    ("fj", "Q33295"), // Fijian
    ("fkv", "Q165795"), // Kvensk
    ("fmp", "Q35276"), // Fe'Fe'
    ("fon", "Q33291"), // Fon
    ("frc", "Q3083213"), // Cajun French
    ("frp", "Q15087"), // Arpitan
    ("frr", "Q28224"), // Northern Frisian
    ("fur", "Q33441"), // Friulian
    ("gaa", "Q33287"), // Ga
    ("gag", "Q33457"), // Gagauz
    ("gan", "Q33475"), // Gan Chinese
    ("gan-hans", "Q33475"), // Gan (Simplified)
    ("gan-hant", "Q33475"), // Gan (Traditional)
    ("gcr", "Q1363072"), // Guianan Creole
    ("gld", "Q13303"), // Nanai
    ("glk", "Q33657"), // Gilaki
    ("gom", "Q5575236"), // Goan Konkani
    ("gor", "Q2501174"), // Gorontalo
    ("got", "Q35722"), // Gothic
    ("grc", "Q35497"), // Ancient Greek
    ("gsw", "Q131339"), // Swiss German
    ("guc", "Q891085"), // Wayuu
    ("gur", "Q35331"), // Frafra
    ("guw", "Q3111668"), // Gun
    ("gv", "Q12175"), // Manx
    ("gya", "Q36594"), // Gbaya
    ("hak", "Q33375"), // Hakka Chinese
    ("haw", "Q33569"), // Hawaiian
    ("hif", "Q46728"), // Fiji Hindi
    ("hif-latn", "Q46728"), // Fiji Hindi (Latin script)
    ("hil", "Q35978"), // Hiligaynon
    ("ho", "Q33617"), // Hiri Motu
    ("hrx", "Q304049"), // Hunsrik
    ("hsn", "Q13220"), // Xiang
    ("ht", "Q33491"), // Haitian Creole
    ("hu-formal", "Q9067"), // Hungarian (formal address)
    ("hyw", "Q180945"), // Western Armenian
    ("hz", "Q33315"), // Herero
    ("ia", "Q35934"), // Interlingua
    ("ie", "Q35850"), // Interlingue
    ("ii", "Q34235"), // Sichuan Yi
    ("ik", "Q27183"), // Inupiaq
    ("ike-cans", "Q29921"), // Eastern Canadian (Aboriginal syllabics)
    ("ike-latn", "Q29921"), // Eastern Canadian (Latin script)
    ("ilo", "Q35936"), // Iloko
    ("inh", "Q33509"), // Ingush
    ("isu", "Q6089423"), // Isu
    ("iu", "Q29921"), // Inuktitut
    ("jam", "Q35939"), // Jamaican Creole English
    ("jbo", "Q36350"), // Lojban
    ("jut", "Q1340322"), // Jutish
    ("kaa", "Q33541"), // Kara-Kalpak
    ("kab", "Q35853"), // Kabyle
    ("kbd", "Q33522"), // Kabardian
    ("kbd-cyrl", "Q33522"), // Kabardian (Cyrillic script)
    ("kbp", "Q35475"), // Kabiye
    ("kcg", "Q3912765"), // Tyap
    ("kea", "Q35963"), // Kabuverdianu
    ("ker", "Q56251"), // Kera
    ("kg", "Q33702"), // Kongo
    ("khw", "Q938216"), // Khowar
    ("ki", "Q33587"), // Kikuyu
    ("kiu", "Q6023868"), // Kirmanjki
    ("kj", "Q1405077"), // Kuanyama
    ("kjp", "Q5330390"), // Eastern Pwo
    ("kk-arab", "Q9252"), // Kazakh (Arabic script)
    ("kk-cn", "Q9252"), // Kazakh (China)
    ("kk-cyrl", "Q9252"), // Kazakh (Cyrillic script)
    ("kk-kz", "Q9252"), // Kazakh (Kazakhstan)
    ("kk-latn", "Q9252"), // Kazakh (Latin script)
    ("kk-tr", "Q9252"), // Kazakh (Turkey)
    ("km", "Q9205"), // Khmer
    ("ko-kp", "Q9176"), // Korean (North Korea)
    ("koi", "Q56318"), // Komi-Permyak
    ("kr", "Q36094"), // Kanuri
    ("krc", "Q33714"), // Karachay-Balkar
    ("kri", "Q35744"), // Krio
    ("krj", "Q33720"), // Kinaray-a
    ("krl", "Q33557"), // Karelian
    ("ks", "Q33552"), // Kashmiri
    ("ksf", "Q34930"), // Bafia
    ("ksh", "Q4624"), // Colognian
    ("ksw", "Q56410"), // S'gaw Karen
    ("ku", "Q36163"), // Kurdish
    ("ku-arab", "Q36163"), // Kurdish (Arabic script)
    ("ku-latn", "Q36163"), // Kurdish (Latin script)
    ("kum", "Q36209"), // Kumyk
    ("kv", "Q36126"), // Komi
    ("ky", "Q9255"), // Kyrgyz
    ("lad", "Q36196"), // Ladino
    ("lbe", "Q36206"), // Lak
    ("lem", "Q13479983"), // Nomaande
    ("lez", "Q31746"), // Lezghian
    ("lg", "Q33368"), // Ganda
    ("li", "Q102172"), // Limburgish
    ("lij", "Q36106"), // Ligurian
    ("liv", "Q33698"), // Livonian
    ("lki", "Q56483"), // Laki
    ("lld", "Q36202"), // Ladin
    ("lmo", "Q33754"), // Lombard
    ("ln", "Q36217"), // Lingala
    ("lns", "Q35788"), // Lamnso'
    ("lo", "Q9211"), // Lao
    ("loz", "Q33628"), // Lozi
    ("lrc", "Q19933293"), // Northern Luri
    ("ltg", "Q36212"), // Latgalian
    ("lus", "Q36147"), // Mizo
    ("luz", "Q12952748"), // Southern Luri
    ("lzh", "Q37041"), // Literary Chinese
    ("lzz", "Q1160372"), // Laz
    ("mad", "Q36213"), // Madurese
    ("map-bms", "Q33219"), // Basa Banyumasan
    ("mcn", "Q56668"), // Massa
    ("mcp", "Q35803"), // Maka
    ("mdf", "Q13343"), // Moksha
    ("mg", "Q7930"), // Malagasy
    ("mh", "Q36280"), // Marshallese
    ("mhr", "Q3906614"), // Eastern Mari
    ("mi", "Q36451"), // Maori
    ("min", "Q13324"), // Minangkabau
    ("mn", "Q9246"), // Mongolian
    ("mnw", "Q13349"), // Mon
    ("mo", "Q7913"), // Moldovan
    ("mrh", "Q4175893"), // Mara
    ("mrj", "Q1776032"), // Western Mari
    ("mua", "Q36032"), // Mundang
    ("mus", "Q523014"), // Muscogee
    ("mwl", "Q13330"), // Mirandese
    ("my", "Q9228"), // Burmese
    ("mzn", "Q13356"), // Mazanderani
    ("na", "Q13307"), // Nauru
    ("nah", "Q13300"), // Nāhuatl
    ("nan-hani", "Q36495"), // Min Nan (Hanji)
    ("nap", "Q33845"), // Neapolitan
    ("nds", "Q25433"), // Low German
    ("nds-nl", "Q25433"), // Low Saxon
    ("new", "Q33979"), // Newari
    ("ng", "Q33900"), // Ndonga
    ("nia", "Q2407831"), // Nias
    ("niu", "Q33790"), // Niuean
    ("nl-informal", "Q7411"), // Dutch (informal address)
    ("nla", "Q36292"), // Ngombala
    ("nmg", "Q34098"), // Kwasio
    ("nmz", "Q36085"), // Nawdm
    ("nnh", "Q36286"), // Ngiemboon
    ("nod", "Q565110"), // Northern Thai
    ("nov", "Q36738"), // Novial
    ("nrm", "Q33850"), // Norman
    ("nso", "Q33890"), // Northern Sotho
    ("nv", "Q13310"), // Navajo
    ("ny", "Q33273"), // Nyanja
    ("nys", "Q7049771"), // Nyungar
    ("ojb", "Q7060356"), // Northwestern Ojibwe
    ("om", "Q33864"), // Oromo
    ("os", "Q33968"), // Ossetic
    ("osa-latn", "Q2600085"), // Osage (Latin script)
    ("ota", "Q36730"), // Ottoman Turkish
    ("pag", "Q33879"), // Pangasinan
    ("pam", "Q36121"), // Pampanga
    ("pap", "Q33856"), // Papiamento
    ("pcd", "Q34024"), // Picard
    ("pdc", "Q22711"), // Pennsylvania German
    ("pdt", "Q1751432"), // Plautdietsch
    ("pfl", "Q23014"), // Palatine German
    ("pih", "Q36554"), // Norfuk / Pitkern
    ("pms", "Q15085"), // Piedmontese
    ("pnt", "Q36748"), // Pontic
    ("prg", "Q35501"), // Prussian
    ("qu", "Q5218"), // Quechua
    ("quc", "Q36494"), // Kʼicheʼ
    ("qug", "Q12953845"), // Chimborazo Highland Quichua
    ("rgn", "Q1641543"), // Romagnol
    ("rif", "Q34174"), // Riffian
    ("rmc", "Q5045611"), // Carpathian Romani
    ("rmf", "Q2093214"), // Finnish Kalo
    ("rmy", "Q2669199"), // Vlax Romani
    ("rn", "Q33583"), // Rundi
    ("roa-rup", "Q29316"), // Aromanian
    ("roa-tara", "Q695526"), // Tarantino
    ("rue", "Q26245"), // Rusyn
    ("rup", "Q29316"), // Aromanian
    ("ruq", "Q13358"), // Megleno-Romanian
    ("ruq-cyrl", "Q13358"), // Megleno-Romanian (Cyrillic script)
    ("ruq-latn", "Q13358"), // Megleno-Romanian (Latin script)
    ("rw", "Q33573"), // Kinyarwanda
    ("rwr", "Q65455884"), // Marwari (India)
    ("ryu", "Q34233"), // Okinawan
    ("sah", "Q34299"), // Sakha
    ("sc", "Q33976"), // Sardinian
    ("sdc", "Q845441"), // Sassarese Sardinian
    ("sdh", "Q1496597"), // Southern Kurdish
    ("sei", "Q36583"), // Seri
    ("ses", "Q35655"), // Koyraboro Senni
    ("sg", "Q33954"), // Sango
    ("sgs", "Q213434"), // Samogitian
    ("shi", "Q34152"), // Tachelhit
    ("shi-latn", "Q34152"), // Tachelhit (Latin script)
    ("shi-tfng", "Q34152"), // Tachelhit (Tifinagh script)
    ("shn", "Q56482"), // Shan
    ("shy", "Q33274"), // Shawiya
    ("shy-latn", "Q33274"), // Shawiya (Latin script)
    ("si", "Q13267"), // Sinhala
    ("simple", "Q1860"), // Simple English
    ("skr", "Q33902"), // Saraiki
    ("skr-arab", "Q33902"), // Saraiki (Arabic script)
    ("sli", "Q152965"), // Lower Silesian
    ("sm", "Q34011"), // Samoan
    ("sn", "Q34004"), // Shona
    ("so", "Q13275"), // Somali
    ("srn", "Q33989"), // Sranan Tongo
    ("srq", "Q3027953"), // Sirionó
    ("st", "Q34340"), // Southern Sotho
    ("stq", "Q27154"), // Saterland Frisian
    ("sty", "Q4418344"), // Siberian Tatar
    ("su", "Q34002"), // Sundanese
    ("sw", "Q7838"), // Swahili
    ("szl", "Q30319"), // Silesian
    ("szy", "Q718269"), // Sakizaya
    ("tay", "Q715766"), // Tayal
    ("tcy", "Q34251"), // Tulu
    ("tet", "Q34125"), // Tetum
    ("tg-cyrl", "Q9260"), // Tajik (Cyrillic script)
    ("tg-latn", "Q9260"), // Tajik (Latin script)
    ("ti", "Q34124"), // Tigrinya
    ("tk", "Q9267"), // Turkmen
    ("tl", "Q34057"), // Tagalog
    ("tly", "Q34318"), // Talysh
    ("tly-cyrl", "Q34318"), // толыши
    ("tn", "Q34137"), // Tswana
    ("to", "Q34094"), // Tongan
    ("tpi", "Q34159"), // Tok Pisin
    ("tru", "Q34040"), // Turoyo
    ("trv", "Q716686"), // Taroko
    ("ts", "Q34327"), // Tsonga
    ("tt", "Q25285"), // Tatar
    ("tt-cyrl", "Q25285"), // Tatar (Cyrillic script)
    ("tt-latn", "Q25285"), // Tatar (Latin script)
    ("tum", "Q34138"), // Tumbuka
    ("tvu", "Q36632"), // Tunen
    ("ty", "Q34128"), // Tahitian
    ("tyv", "Q34119"), // Tuvinian
    ("tzm", "Q49741"), // Central Atlas Tamazight
    ("ug", "Q13263"), // Uyghur
    ("ug-arab", "Q13263"), // Uyghur (Arabic script)
    ("ug-latn", "Q13263"), // Uyghur (Latin script)
    ("uz", "Q9264"), // Uzbek
    ("uz-cyrl", "Q9264"), // Uzbek (Cyrillic script)
    ("uz-latn", "Q9264"), // Uzbek (Latin script)
    ("ve", "Q32704"), // Venda
    ("vec", "Q32724"), // Venetian
    ("vls", "Q100103"), // West Flemish
    ("vot", "Q32858"), // Votic
    ("vro", "Q32762"), // Võro
    ("vut", "Q36897"), // Vute
    ("war", "Q34279"), // Waray
    ("wes", "Q35541"), // Pidgin (Cameroon)
    ("wls", "Q36979"), // Wallisian
    ("wo", "Q34257"), // Wolof
    ("wuu", "Q34290"), // Wu Chinese
    ("wya", "Q1185119"), // Wyandot
    ("xal", "Q33634"), // Kalmyk
    ("xh", "Q13218"), // Xhosa
    ("xmf", "Q13359"), // Mingrelian
    ("xsy", "Q716695"), // Saisiyat
    ("yas", "Q36358"), // Nugunu
    ("yat", "Q8048020"), // Yambeta
    ("yav", "Q12953315"), // Yangben
    ("ybb", "Q36917"), // Yemba
    ("yi", "Q8641"), // Yiddish
    ("yo", "Q34311"), // Yoruba
    ("yrl", "Q34333"), // Nheengatu
    ("yue", "Q7033959"), // Cantonese
    ("za", "Q13216"), // Zhuang
    ("zea", "Q237409"), // Zeelandic
    ("zgh", "Q7598268"), // Standard Moroccan Tamazight
    ("zu", "Q10179"), // Zulu
    ("bn-x-Q48726740", "Q48726740"), // bangali
    ("bn-x-Q48726757", "Q48726757"), // varendri
    ("bn-x-Q6747180", "Q6747180"), // manbhumi
    ("bn-x-Q48726759", "Q48726759"), // rarhi
    ("bn-x-Q107548681", "Q107548681"), // noakhailla
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_lookup_by_code() {
        let reg = LanguageRegistry::wikidata();
        let en = reg.first("en").unwrap();
        assert_eq!(en.code(), "en");
        assert_eq!(en.item(), &Qid::new("Q1860").unwrap());
    }

    #[test]
    fn reverse_lookup_by_item() {
        let reg = LanguageRegistry::wikidata();
        // German: de plus the de-1901 and de-formal variants.
        let codes: Vec<&str> = reg
            .by_item(&Qid::new("Q188").unwrap())
            .iter()
            .map(|l| l.code())
            .collect();
        assert_eq!(codes[0], "de");
        assert!(codes.contains(&"de-formal"));
    }

    #[test]
    fn one_item_may_back_many_codes() {
        let reg = LanguageRegistry::wikidata();
        // Mandarin: zh, zh-cn, zh-hans, zh-hant, ...
        let codes: Vec<&str> = reg
            .by_item(&Qid::new("Q9192").unwrap())
            .iter()
            .map(|l| l.code())
            .collect();
        assert!(codes.contains(&"zh"));
        assert!(codes.contains(&"zh-hans"));
        assert!(codes.contains(&"zh-hant"));
    }

    #[test]
    fn one_item_shared_by_und_and_mis() {
        let reg = LanguageRegistry::wikidata();
        let codes: Vec<&str> = reg
            .by_item(&Qid::new("Q22283016").unwrap())
            .iter()
            .map(|l| l.code())
            .collect();
        assert_eq!(codes, vec!["mis", "und"]);
    }

    #[test]
    fn find_dispatches_on_key_shape() {
        let reg = LanguageRegistry::wikidata();
        assert_eq!(reg.find("fr")[0].item(), &Qid::new("Q150").unwrap());
        assert_eq!(reg.find("Q150")[0].code(), "fr");
    }

    #[test]
    fn unknown_code_yields_empty_and_first_errors() {
        let reg = LanguageRegistry::wikidata();
        assert!(reg.by_code("tlh-x-nonsense").is_empty());
        assert_eq!(
            reg.first("tlh-x-nonsense").unwrap_err(),
            IdError::UnknownLanguage("tlh-x-nonsense".to_string())
        );
    }

    #[test]
    fn explicit_registry_instances_are_independent() {
        let reg = LanguageRegistry::new(vec![Language::new(
            "en",
            Qid::new("Q1860").unwrap(),
        )]);
        assert_eq!(reg.len(), 1);
        assert!(reg.by_code("de").is_empty());
    }

    #[test]
    fn global_registry_is_memoized() {
        let a = registry() as *const LanguageRegistry;
        let b = registry() as *const LanguageRegistry;
        assert_eq!(a, b);
        assert!(!registry().is_empty());
    }

    #[test]
    fn first_prefers_table_order() {
        let reg = LanguageRegistry::wikidata();
        // Both `mis` and `und` share the item; `mis` is registered first.
        assert_eq!(reg.first("Q22283016").unwrap().code(), "mis");
    }
}
