//! Curated French foodstuff tables.
//!
//! Every term is written in canonical form (see [`super::normalize::normalize`]):
//! lowercase, no accents, no leading determiner.

/// Sets of terms that denote the same product. Groups must be disjoint.
pub const SYNONYM_GROUPS: &[&[&str]] = &[
    &[
        "pates",
        "spaghetti",
        "spaghettis",
        "tagliatelles",
        "penne",
        "fusilli",
        "macaroni",
        "nouilles",
        "coquillettes",
        "farfalle",
        "linguine",
    ],
    &["pate brisee", "pate feuilletee", "pate sablee", "pate a tarte"],
    &[
        "tomate",
        "tomates",
        "tomates cerises",
        "tomates pelees",
        "coulis de tomate",
        "sauce tomate",
    ],
    &[
        "poulet",
        "blanc de poulet",
        "escalope de poulet",
        "cuisse de poulet",
        "filet de poulet",
    ],
    &["boeuf", "steak", "viande hachee", "steak hache"],
    &["porc", "cotes de porc", "echine de porc", "filet mignon"],
    &["saumon", "pave de saumon", "filet de saumon", "saumon fume"],
    &["pomme de terre", "pommes de terre", "patate", "patates"],
    &["pomme", "pommes"],
    &["oignon", "oignons", "echalote", "echalotes"],
    &["ail", "gousse d'ail", "gousses d'ail"],
    &["carotte", "carottes"],
    &["courgette", "courgettes"],
    &["aubergine", "aubergines"],
    &["poivron", "poivrons"],
    &["champignon", "champignons", "champignons de paris"],
    &["haricot vert", "haricots verts"],
    &["petit pois", "petits pois"],
    &["poireau", "poireaux"],
    &["salade", "laitue", "batavia", "feuille de chene"],
    &["fromage", "emmental", "gruyere", "comte", "fromage rape"],
    &["mozzarella", "mozzarelle"],
    &["parmesan", "parmigiano"],
    &["creme fraiche", "creme", "creme liquide", "creme epaisse"],
    &["lait", "lait entier", "lait demi-ecreme"],
    &["beurre"],
    &["oeuf", "oeufs"],
    &["huile d'olive", "huile olive"],
    &["huile", "huile de tournesol", "huile vegetale"],
    &["riz", "riz basmati", "riz long", "riz complet"],
    &["pain", "pain de mie", "baguette"],
    &["farine", "farine de ble"],
    &["sucre", "sucre en poudre", "sucre roux"],
    &["sel", "sel fin", "gros sel"],
    &["poivre", "poivre noir", "poivre moulu"],
    &["basilic", "basilic frais"],
    &["persil", "persil frais", "persil plat"],
    &["thym", "thym frais"],
    &["romarin", "romarin frais"],
    &["cannelle", "cannelle en poudre"],
    &["jambon", "jambon blanc", "jambon cru"],
    &["lardons", "lardon", "poitrine fumee"],
    &["yaourt", "yogourt", "yaourt nature", "sauce yaourt"],
    &["banane", "bananes"],
    &["fraise", "fraises"],
    &["framboise", "framboises"],
    &["citron", "citrons", "jus de citron"],
    &["orange", "oranges", "jus d'orange"],
    &["avocat", "avocats"],
    &["concombre", "concombres"],
    &["mais", "mais en boite"],
    &["olive", "olives", "olives noires"],
    &["noix", "cerneaux de noix"],
    &["miel"],
    &["moutarde", "moutarde de dijon"],
    &["vinaigre", "vinaigre balsamique", "vinaigre de vin"],
    &["sauce soja", "sauce soja sucree"],
    &[
        "bouillon",
        "bouillon de volaille",
        "bouillon de legumes",
        "bouillon cube",
    ],
    &["vin blanc", "vin blanc sec"],
    &["tortilla", "tortillas", "galette de ble"],
    &["chevre", "fromage de chevre", "buche de chevre"],
    &["levure", "levure de boulanger", "levure seche"],
];

/// Pairs that look alike but must never match each other.
pub const EXCLUSION_PAIRS: &[(&str, &str)] = &[
    ("pates", "pate brisee"),
    ("pates", "pate feuilletee"),
    ("pates", "pate sablee"),
    ("pates", "pate a tarte"),
    ("pate", "pate brisee"),
    ("pate", "pate feuilletee"),
    ("pate", "pate sablee"),
    ("pomme", "pomme de terre"),
    ("pommes", "pommes de terre"),
];
