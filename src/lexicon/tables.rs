//! Static normalization data.
//!
//! Keys are lowercase with periods removed; multi-word keys are joined by a
//! single space. Each table row pairs a canonical form with the spellings that
//! normalize to it. The canonical form is accepted as a key too, except in
//! the plural street type table where it is the singular.

pub(crate) type Row = (&'static str, &'static [&'static str]);

pub(crate) static DIRECTIONALS: &[Row] = &[
    ("N", &["north"]),
    ("S", &["south"]),
    ("E", &["east"]),
    ("W", &["west"]),
    ("NE", &["northeast", "north east", "north-east", "n e"]),
    ("NW", &["northwest", "north west", "north-west", "n w"]),
    ("SE", &["southeast", "south east", "south-east", "s e"]),
    ("SW", &["southwest", "south west", "south-west", "s w"]),
];

// USPS Publication 28, Appendix C1.
pub(crate) static STREET_TYPES: &[Row] = &[
    ("Aly", &["alley", "allee", "ally"]),
    ("Anx", &["annex", "anex", "annx"]),
    ("Arc", &["arcade"]),
    ("Ave", &["avenue", "av", "aven", "avenu", "avn", "avnue"]),
    ("Byu", &["bayou", "bayoo"]),
    ("Bch", &["beach"]),
    ("Bnd", &["bend"]),
    ("Blf", &["bluff", "bluf"]),
    ("Blfs", &["bluffs"]),
    ("Btm", &["bottom", "bot", "bottm"]),
    ("Blvd", &["boulevard", "boul", "boulv"]),
    ("Br", &["branch", "brnch"]),
    ("Brg", &["bridge", "brdge"]),
    ("Brk", &["brook"]),
    ("Brks", &["brooks"]),
    ("Bg", &["burg"]),
    ("Bgs", &["burgs"]),
    ("Byp", &["bypass", "bypa", "bypas", "byps"]),
    ("Cp", &["camp", "cmp"]),
    ("Cyn", &["canyon", "canyn", "cnyn"]),
    ("Cpe", &["cape"]),
    ("Cswy", &["causeway", "causwa"]),
    ("Ctr", &["center", "cen", "cent", "centr", "centre", "cnter", "cntr"]),
    ("Ctrs", &["centers"]),
    ("Cir", &["circle", "circ", "circl", "crcl", "crcle"]),
    ("Cirs", &["circles"]),
    ("Clf", &["cliff"]),
    ("Clfs", &["cliffs"]),
    ("Clb", &["club"]),
    ("Cmn", &["common"]),
    ("Cmns", &["commons"]),
    ("Cor", &["corner"]),
    ("Cors", &["corners"]),
    ("Crse", &["course"]),
    ("Ct", &["court"]),
    ("Cts", &["courts"]),
    ("Cv", &["cove"]),
    ("Cvs", &["coves"]),
    ("Crk", &["creek"]),
    ("Cres", &["crescent", "crsent", "crsnt"]),
    ("Crst", &["crest"]),
    ("Xing", &["crossing", "crssng"]),
    ("Xrd", &["crossroad", "cross road"]),
    ("Xrds", &["crossroads"]),
    ("Curv", &["curve"]),
    ("Dl", &["dale"]),
    ("Dm", &["dam"]),
    ("Dv", &["divide", "div", "dvd"]),
    ("Dr", &["drive", "driv", "drv"]),
    ("Drs", &["drives"]),
    ("Est", &["estate"]),
    ("Ests", &["estates"]),
    ("Expy", &["expressway", "express way", "exp", "expr", "express", "expw"]),
    ("Ext", &["extension", "extn", "extnsn"]),
    ("Exts", &["extensions"]),
    ("Fls", &["falls"]),
    ("Fry", &["ferry", "frry"]),
    ("Fld", &["field"]),
    ("Flds", &["fields"]),
    ("Flt", &["flat"]),
    ("Flts", &["flats"]),
    ("Frd", &["ford"]),
    ("Frds", &["fords"]),
    ("Frst", &["forest", "forests"]),
    ("Frg", &["forge", "forg"]),
    ("Frgs", &["forges"]),
    ("Frk", &["fork"]),
    ("Frks", &["forks"]),
    ("Ft", &["fort", "frt"]),
    ("Fwy", &["freeway", "free way", "freewy", "frway", "frwy"]),
    ("Gdn", &["garden", "gardn", "grden", "grdn"]),
    ("Gdns", &["gardens", "grdns"]),
    ("Gtwy", &["gateway", "gatewy", "gatway", "gtway"]),
    ("Gln", &["glen"]),
    ("Glns", &["glens"]),
    ("Grn", &["green"]),
    ("Grns", &["greens"]),
    ("Grv", &["grove", "grov"]),
    ("Grvs", &["groves"]),
    ("Hbr", &["harbor", "harb", "harbr", "hrbor"]),
    ("Hbrs", &["harbors"]),
    ("Hvn", &["haven"]),
    ("Hts", &["heights", "ht"]),
    ("Hwy", &["highway", "high way", "highwy", "hiway", "hiwy", "hway"]),
    ("Hl", &["hill"]),
    ("Hls", &["hills"]),
    ("Holw", &["hollow", "hllw", "hollows", "holws"]),
    ("Inlt", &["inlet"]),
    ("Is", &["island", "islnd"]),
    ("Iss", &["islands", "islnds"]),
    ("Isle", &["isles"]),
    ("Jct", &["junction", "jction", "jctn", "junctn", "juncton"]),
    ("Jcts", &["junctions", "jctns"]),
    ("Ky", &["key"]),
    ("Kys", &["keys"]),
    ("Knl", &["knoll", "knol"]),
    ("Knls", &["knolls"]),
    ("Lk", &["lake"]),
    ("Lks", &["lakes"]),
    ("Land", &[]),
    ("Lndg", &["landing", "lndng"]),
    ("Ln", &["lane"]),
    ("Lgt", &["light"]),
    ("Lgts", &["lights"]),
    ("Lf", &["loaf"]),
    ("Lck", &["lock"]),
    ("Lcks", &["locks"]),
    ("Ldg", &["lodge", "ldge", "lodg"]),
    ("Loop", &["loops"]),
    ("Mall", &[]),
    ("Mnr", &["manor"]),
    ("Mnrs", &["manors"]),
    ("Mdw", &["meadow"]),
    ("Mdws", &["meadows", "medows"]),
    ("Mews", &[]),
    ("Ml", &["mill"]),
    ("Mls", &["mills"]),
    ("Msn", &["mission", "missn", "mssn"]),
    ("Mtwy", &["motorway"]),
    ("Mt", &["mount", "mnt"]),
    ("Mtn", &["mountain", "mntain", "mntn", "mountin", "mtin"]),
    ("Mtns", &["mountains", "mntns"]),
    ("Nck", &["neck"]),
    ("Orch", &["orchard", "orchrd"]),
    ("Oval", &["ovl"]),
    ("Opas", &["overpass"]),
    ("Park", &["prk", "parks"]),
    ("Pkwy", &["parkway", "park way", "parkwy", "pkway", "pky", "parkways", "pkwys"]),
    ("Pass", &[]),
    ("Psge", &["passage"]),
    ("Path", &["paths"]),
    ("Pike", &["pikes"]),
    ("Pne", &["pine"]),
    ("Pnes", &["pines"]),
    ("Pl", &["place"]),
    ("Pln", &["plain"]),
    ("Plns", &["plains"]),
    ("Plz", &["plaza", "plza"]),
    ("Pt", &["point"]),
    ("Pts", &["points"]),
    ("Prt", &["port"]),
    ("Prts", &["ports"]),
    ("Pr", &["prairie", "prr"]),
    ("Radl", &["radial", "rad", "radiel"]),
    ("Ramp", &[]),
    ("Rnch", &["ranch", "ranches", "rnchs"]),
    ("Rpd", &["rapid"]),
    ("Rpds", &["rapids"]),
    ("Rst", &["rest"]),
    ("Rdg", &["ridge", "rdge"]),
    ("Rdgs", &["ridges"]),
    ("Riv", &["river", "rvr", "rivr"]),
    ("Rd", &["road"]),
    ("Rds", &["roads"]),
    ("Rte", &["route"]),
    ("Row", &[]),
    ("Rue", &[]),
    ("Run", &[]),
    ("Shl", &["shoal"]),
    ("Shls", &["shoals"]),
    ("Shr", &["shore", "shoar"]),
    ("Shrs", &["shores", "shoars"]),
    ("Skwy", &["skyway"]),
    ("Spg", &["spring", "spng", "sprng"]),
    ("Spgs", &["springs", "spngs", "sprngs"]),
    ("Spur", &["spurs"]),
    ("Sq", &["square", "sqr", "sqre", "squ"]),
    ("Sqs", &["squares", "sqrs"]),
    ("Sta", &["station", "statn", "stn"]),
    ("Stra", &["stravenue", "strav", "straven", "stravn", "strvn", "strvnue"]),
    ("Strm", &["stream", "streme"]),
    ("St", &["street", "str", "strt"]),
    ("Sts", &["streets"]),
    ("Smt", &["summit", "sumit", "sumitt"]),
    ("Ter", &["terrace", "terr"]),
    ("Trwy", &["throughway"]),
    ("Trce", &["trace", "traces"]),
    ("Trak", &["track", "tracks", "trk", "trks"]),
    ("Trfy", &["trafficway"]),
    ("Trl", &["trail", "trails", "trls"]),
    ("Trlr", &["trailer", "trlrs"]),
    ("Tunl", &["tunnel", "tunel", "tunls", "tunnels", "tunnl"]),
    ("Tpke", &["turnpike", "turn pike", "trnpk", "turnpk"]),
    ("Upas", &["underpass"]),
    ("Un", &["union"]),
    ("Uns", &["unions"]),
    ("Vly", &["valley", "vally", "vlly"]),
    ("Vlys", &["valleys"]),
    ("Via", &["viaduct", "vdct", "viadct"]),
    ("Vw", &["view"]),
    ("Vws", &["views"]),
    ("Vlg", &["village", "vill", "villag", "villg", "villiage"]),
    ("Vlgs", &["villages"]),
    ("Vl", &["ville"]),
    ("Vis", &["vista", "vist", "vst", "vsta"]),
    ("Walk", &["walks"]),
    ("Wall", &[]),
    ("Way", &["wy"]),
    ("Ways", &[]),
    ("Wl", &["well"]),
    ("Wls", &["wells"]),
];

// Plural spellings that let two intersecting streets share one type, as in
// "Hollywood & Vine Sts".
/// Plural spellings mapped to the singular abbreviation.
pub(crate) static PLURAL_STREET_TYPES: &[Row] = &[
    ("Ave", &["aves", "avenues"]),
    ("Blvd", &["blvds", "boulevards"]),
    ("Ct", &["courts"]),
    ("Dr", &["drs", "drives"]),
    ("Ln", &["lns", "lanes"]),
    ("Pl", &["pls", "places"]),
    ("Rd", &["rds", "roads"]),
    ("St", &["sts", "streets"]),
    ("Ter", &["ters", "terraces"]),
];

/// `(code, fips, names)`
pub(crate) static STATES: &[(&str, &str, &[&str])] = &[
    ("AL", "01", &["alabama"]),
    ("AK", "02", &["alaska"]),
    ("AZ", "04", &["arizona", "ariz"]),
    ("AR", "05", &["arkansas", "ark"]),
    ("CA", "06", &["california", "calif"]),
    ("CO", "08", &["colorado", "colo"]),
    ("CT", "09", &["connecticut", "conn"]),
    ("DE", "10", &["delaware"]),
    ("DC", "11", &["district of columbia", "d c"]),
    ("FL", "12", &["florida", "fla"]),
    ("GA", "13", &["georgia"]),
    ("HI", "15", &["hawaii"]),
    ("ID", "16", &["idaho"]),
    ("IL", "17", &["illinois", "ill"]),
    ("IN", "18", &["indiana", "ind"]),
    ("IA", "19", &["iowa"]),
    ("KS", "20", &["kansas", "kans"]),
    ("KY", "21", &["kentucky"]),
    ("LA", "22", &["louisiana"]),
    ("ME", "23", &["maine"]),
    ("MD", "24", &["maryland"]),
    ("MA", "25", &["massachusetts", "mass"]),
    ("MI", "26", &["michigan", "mich"]),
    ("MN", "27", &["minnesota", "minn"]),
    ("MS", "28", &["mississippi", "miss"]),
    ("MO", "29", &["missouri"]),
    ("MT", "30", &["montana", "mont"]),
    ("NE", "31", &["nebraska", "nebr"]),
    ("NV", "32", &["nevada", "nev"]),
    ("NH", "33", &["new hampshire"]),
    ("NJ", "34", &["new jersey"]),
    ("NM", "35", &["new mexico"]),
    ("NY", "36", &["new york"]),
    ("NC", "37", &["north carolina"]),
    ("ND", "38", &["north dakota"]),
    ("OH", "39", &["ohio"]),
    ("OK", "40", &["oklahoma", "okla"]),
    ("OR", "41", &["oregon", "ore"]),
    ("PA", "42", &["pennsylvania", "penn", "penna"]),
    ("RI", "44", &["rhode island"]),
    ("SC", "45", &["south carolina"]),
    ("SD", "46", &["south dakota"]),
    ("TN", "47", &["tennessee", "tenn"]),
    ("TX", "48", &["texas", "tex"]),
    ("UT", "49", &["utah"]),
    ("VT", "50", &["vermont"]),
    ("VA", "51", &["virginia"]),
    ("WA", "53", &["washington", "wash"]),
    ("WV", "54", &["west virginia"]),
    ("WI", "55", &["wisconsin", "wis", "wisc"]),
    ("WY", "56", &["wyoming", "wyo"]),
    ("AS", "60", &["american samoa"]),
    ("FM", "64", &["federated states of micronesia", "micronesia"]),
    ("GU", "66", &["guam"]),
    ("MH", "68", &["marshall islands"]),
    ("MP", "69", &["northern mariana islands", "northern marianas"]),
    ("PW", "70", &["palau"]),
    ("PR", "72", &["puerto rico"]),
    ("VI", "78", &["virgin islands", "us virgin islands", "united states virgin islands"]),
    ("AA", "", &["armed forces americas"]),
    ("AE", "", &["armed forces europe"]),
    ("AP", "", &["armed forces pacific"]),
];

// Designators that are followed by a unit identifier.
pub(crate) static NUMBERED_UNITS: &[Row] = &[
    ("Apt", &["apartment", "apart"]),
    ("Bldg", &["building", "bld"]),
    ("Dept", &["department"]),
    ("Fl", &["floor", "flr"]),
    ("Hngr", &["hangar", "hanger"]),
    ("Key", &[]),
    ("Lot", &[]),
    ("Pier", &[]),
    ("Rm", &["room"]),
    ("Slip", &[]),
    ("Spc", &["space"]),
    ("Stop", &[]),
    ("Ste", &["suite", "suit"]),
    ("Trlr", &["trailer"]),
    ("Unit", &[]),
];

// Designators that stand alone.
pub(crate) static UNNUMBERED_UNITS: &[Row] = &[
    ("Bsmt", &["basement"]),
    ("Frnt", &["front"]),
    ("Lbby", &["lobby"]),
    ("Lowr", &["lower"]),
    ("Ofc", &["office"]),
    ("Ph", &["penthouse"]),
    ("Rear", &[]),
    ("Side", &[]),
    ("Uppr", &["upper"]),
];
