//! Synthetic display names given to contenders when they join.

use rand::seq::IndexedRandom;
use rand::Rng;

/// Pool of made-up full names.
pub const FAKE_NAMES: &[&str] = &[
    "Tamela Flinchum",
    "Tonia Pickell",
    "Gillian Kotek",
    "Suzan Davisson",
    "Mikel Doerr",
    "Imelda Mannix",
    "Dot Dimuzio",
    "Hope Simoneau",
    "Christinia Markum",
    "Miguelina Rosati",
    "Lyn Pacelli",
    "Candis Gourd",
    "Roni Bryd",
    "Stephenie Spadafora",
    "Johnna Hebron",
    "Lucrecia Barefield",
    "Julieann Benda",
    "Joeann Lyles",
    "Lanell Stuhr",
    "Li Prentice",
    "Eryn Ruzicka",
    "Katlyn Becker",
    "Elizbeth Elsey",
    "Meri Hewlett",
    "Desmond Stiverson",
    "Kristie Gunter",
    "Della Robichaud",
    "Randal Finkbeiner",
    "Hugo Piehl",
    "Frederica Lamere",
    "Mia Feeley",
    "Marcell Lamb",
    "Olivia Koehn",
    "Hildred Monaghan",
    "Sherrill Fabian",
    "Petronila Coloma",
    "Kiley Beshears",
    "Ashely Greenly",
    "James Pascal",
    "Clara Wynkoop",
    "Georgianna Eberly",
    "Angelique Kessler",
    "Simonne Schwindt",
    "Shakita Maddox",
    "Tim Coster",
    "Gonzalo Israel",
    "Ozella Grunwald",
    "Cruz Coman",
    "Nieves Lamothe",
    "Wade Coberly",
    "Twanda Kottwitz",
    "Delena Barraza",
    "Lilliana Reinhardt",
    "Hui Bruemmer",
    "Shaquana Ciesla",
    "Jannette Royall",
    "Halina Mars",
    "Darci Kaye",
    "Kaitlin Kriss",
    "Tiara Sulzer",
    "Malvina Schutt",
    "Rashad Furniss",
    "Dollie Radcliffe",
    "Jacqualine Mosser",
    "Cortez Murdock",
    "Monte Cruzado",
    "Jose Hwang",
    "Althea Corona",
    "Kathryn Harting",
    "Coralie Glaude",
    "Hilario Branson",
    "Emma Keogh",
    "Cristina Stackpole",
    "Stanford Malson",
    "Ross Wallin",
    "Susanna Nachman",
    "Leopoldo Leeds",
    "Zora Dandridge",
    "Chris Molinar",
    "Kurtis Gaona",
    "Raven Zambrana",
    "Debbie Stmartin",
    "Drusilla Dabrowski",
    "Nicol Mcclaskey",
    "Juliane Radebaugh",
    "Edwina Parkey",
    "Eladia Weinberger",
    "Elijah Ahlstrom",
    "Waldo Soloman",
    "Luanna Sass",
    "Kaitlyn Bosh",
    "Rory Ory",
    "Paulette Liriano",
    "Penelope Mckernan",
    "Emmitt Capra",
    "Mae Heim",
    "Samira Langhorne",
    "Jeanett Legaspi",
    "Sharla Marson",
    "Isobel Earls",
    "Phil Thomson",
    "Vernice Sidoti",
    "Marquis Lindsay",
    "Blanch Ehret",
    "Brant Pilkenton",
    "Kathrine Kennelly",
    "Giovanni Caughman",
    "Eduardo Dame",
    "Sheila Sinner",
    "Marcelene Mcdonagh",
    "Ayanna Plants",
    "Larry Cyrus",
    "Cristy Meister",
    "Jeanie Marko",
    "Anibal Underdown",
    "Gregory Wolfgram",
    "Corrin Force",
    "Inez Brunn",
    "Doreen Czapla",
    "Isaac Romberg",
    "Lisette Shuford",
    "Breanna Boris",
    "Verena Fazzino",
    "Kristin Palomares",
    "Sherril Berthiaume",
    "Minerva Nieto",
    "Herlinda Bishop",
    "Ernestina Overfield",
    "Lorie Duffie",
    "Theo Churchill",
    "Jillian Colley",
    "Kirk Daoust",
    "Junita Tezeno",
    "Kayleen Mcfaul",
    "Debera Kensinger",
    "Enola Ballengee",
    "Mitzie Ruis",
    "Deirdre Follette",
    "Tarsha Kloster",
    "Manuela Crepeau",
    "Carmelita Traynor",
    "Corie Fyffe",
    "Tonya Dory",
    "Lorenzo Rieck",
    "Aleen Shaw",
    "Danielle Dansie",
    "Paula Stringham",
    "Tomas Ruple",
    "Meggan Belcher",
    "Luna Ramm",
    "Annabell Roda",
    "Shalonda Delgiudice",
    "Dusty Zeck",
    "Paz Verde",
    "Kent Unknow",
    "Dale Millwood",
    "Sonya Notter",
    "Carl Mero",
    "Norah Dowdell",
    "Meta Pucci",
    "Aracelis Grover",
    "Shella Jardine",
    "Kandice Forman",
    "Joy Bakken",
    "Timmy Eckler",
    "Meggan Andreotti",
    "Lavonia Lummus",
    "Elnora Koontz",
    "Rolande Sack",
    "Nereida Zerr",
    "Rogelio Bennett",
    "Rachele Heintz",
    "Chassidy Reamer",
    "Eugenia Placencia",
    "Janett Holaday",
    "Lissette Lunt",
    "Michelina Theodore",
    "Salvador Mehta",
    "Myrtie Beal",
    "Johnnie Macek",
    "Janay Garriga",
    "Vernon Kampen",
    "Kayce Byington",
    "Richard Blas",
    "Astrid Labat",
    "Kathlyn Staple",
    "Arlette Sternberg",
    "Calista Ardoin",
    "Bonita Kepler",
    "Enriqueta Right",
    "Janeen Pogue",
    "Jenna Glandon",
    "Kandra Armstong",
    "Wilson Liedtke",
    "Aida Fowles",
    "Rheba Steimle",
    "Roger Doud",
    "Nena Yohn",
    "Antoinette Vancleve",
    "Carmine Garr",
    "Elmer Bernhard",
    "Kasey Aldana",
    "Raymundo Rumble",
    "Easter Dalpiaz",
    "Miki Uhler",
    "Arnoldo Starns",
    "Floyd Blasi",
    "Carlena Laughter",
    "Marti Mars",
    "Tonisha Schwartzman",
    "Ila Andreas",
    "Shella Sluss",
    "Mittie Hemmer",
    "Cherise Espy",
    "Denae Mota",
    "Alene Vos",
    "Geraldo Starkes",
    "Rosalina Tsuji",
    "Stefan Almquist",
    "Jennifer Hall",
    "Anita Clowers",
    "Javier Bardin",
    "Nellie Wassink",
    "Leone Debow",
    "Shayna Wahl",
    "Pricilla Rawling",
    "Orville Obregon",
    "Ladawn Morello",
    "Casimira Mathias",
    "Debbra Kimbler",
    "Etsuko Rotz",
    "Alysha Nachman",
    "Ressie Brophy",
    "Latonya Burk",
    "Kristine Lyford",
    "Consuela Hazen",
    "Williemae Leja",
    "Bryon Nicola",
    "Frankie Drummer",
    "Ossie Lobb",
    "Kami Leber",
    "Damian Kraemer",
    "Dusti Matley",
    "Trudy Lipsey",
    "Shonna Eastwood",
    "Marin Bull",
    "Lila Sisemore",
    "Ilda Langer",
    "Marvel Michelle",
    "Simone Dudding",
    "Maira Laramore",
    "Hermelinda Rupp",
    "Luisa Born",
    "Anisa Hagen",
    "Madonna Ropp",
    "Shelba Heffner",
    "Delbert Senegal",
    "Brice Jaynes",
    "Lashay Dill",
    "Annabell Riner",
    "Anneliese Slaughter",
    "Nida Jemison",
    "Jacinto Pleas",
    "Tamie Altom",
    "Bert Petrus",
    "Dotty Furey",
    "Gretchen Griffie",
    "Krystina Coger",
    "Ernest Scovil",
    "Lauralee Hinderliter",
    "Heriberto Flannigan",
    "Kimi Dudding",
    "Racquel Friedman",
    "Ana Koeller",
    "Janel Bogen",
    "Clifford Condie",
    "Kirby Diebold",
    "Jake Mcnicholas",
    "Silvia Sproull",
    "Chasity Barthel",
    "Sheryll Wulf",
    "Kiana Wess",
    "Felica Hoefer",
    "Rex Champlin",
    "Julienne Wise",
    "Ivy Huizar",
    "Keira Terrell",
    "Virgil Tan",
    "Ok Wishart",
    "Louann Kidd",
    "Marva Lagrone",
    "Idalia Wiltz",
    "Willena Perryman",
    "Khadijah Ardis",
    "Tomeka Hoffman",
    "Lyda Livers",
    "Gregoria Perrodin",
    "Ngoc Antonucci",
    "Shaquita Feltner",
    "Perry Jowett",
];

/// Picks a display name uniformly from [`FAKE_NAMES`].
pub fn random_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    FAKE_NAMES.choose(rng).copied().unwrap_or("Anonymous Contender")
}
