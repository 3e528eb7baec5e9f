//! Built-in content tables.

/// Category → subcategory → items, in display/registration order.
pub(crate) const TAXONOMY: &[(&str, &[(&str, &[&str])])] = &[
    (
        "Celebrities",
        &[
            (
                "Actors",
                &[
                    "Tom Cruise", "Brad Pitt", "Leonardo DiCaprio", "Jennifer Lawrence",
                    "Scarlett Johansson", "Robert Downey Jr", "Morgan Freeman", "Will Smith",
                    "Tom Hanks", "Johnny Depp",
                ],
            ),
            (
                "Musicians",
                &[
                    "Taylor Swift", "Ed Sheeran", "Drake", "Beyoncé", "The Weeknd", "BTS",
                    "Lady Gaga", "Eminem", "Rihanna", "Justin Bieber",
                ],
            ),
            (
                "Athletes",
                &[
                    "Cristiano Ronaldo", "Lionel Messi", "LeBron James", "Roger Federer",
                    "Serena Williams", "Michael Jordan", "Usain Bolt", "Tiger Woods",
                    "Rafael Nadal", "Virat Kohli",
                ],
            ),
        ],
    ),
    (
        "Technology",
        &[
            (
                "Smartphones",
                &[
                    "iPhone 15 Pro Max", "Samsung Galaxy S24 Ultra", "Google Pixel 8 Pro",
                    "OnePlus 12", "Xiaomi 14 Pro", "Nothing Phone 2", "ASUS ROG Phone 8",
                    "Sony Xperia 1 V",
                ],
            ),
            (
                "Gaming",
                &[
                    "PlayStation 5", "Xbox Series X", "Nintendo Switch OLED", "Steam Deck",
                    "ROG Ally", "PlayStation VR2", "Meta Quest 3",
                ],
            ),
            (
                "Software",
                &[
                    "ChatGPT", "Microsoft Office", "Adobe Photoshop", "Zoom", "Slack",
                    "Visual Studio Code", "Unity Engine", "Unreal Engine 5",
                ],
            ),
        ],
    ),
    (
        "Automotive",
        &[
            (
                "Luxury",
                &[
                    "Rolls-Royce Phantom", "Bentley Continental GT", "Mercedes-Maybach S-Class",
                    "Porsche 911 GT3", "Lamborghini Huracán", "Ferrari SF90", "McLaren 720S",
                ],
            ),
            (
                "Electric",
                &[
                    "Tesla Model S Plaid", "Lucid Air", "Rivian R1T", "Porsche Taycan", "BMW i7",
                    "Mercedes EQS", "Audi e-tron GT",
                ],
            ),
            (
                "Sports",
                &[
                    "Bugatti Chiron", "Koenigsegg Jesko", "Pagani Huayra", "Aston Martin Valkyrie",
                    "McLaren P1", "Ferrari LaFerrari", "Porsche 918 Spyder",
                ],
            ),
        ],
    ),
    (
        "Entertainment",
        &[
            (
                "Movies",
                &[
                    "Avatar", "Avengers: Endgame", "Titanic", "Star Wars", "Jurassic World",
                    "The Lion King", "Top Gun: Maverick", "Barbie",
                ],
            ),
            (
                "TVShows",
                &[
                    "Stranger Things", "Game of Thrones", "Breaking Bad", "The Last of Us",
                    "Wednesday", "The Mandalorian", "House of the Dragon",
                ],
            ),
            (
                "Games",
                &[
                    "Minecraft", "GTA V", "The Legend of Zelda", "Cyberpunk 2077",
                    "Red Dead Redemption 2", "Elden Ring", "God of War Ragnarök",
                ],
            ),
        ],
    ),
    (
        "Sports",
        &[
            (
                "Teams",
                &[
                    "Real Madrid", "Manchester United", "Los Angeles Lakers", "New York Yankees",
                    "Dallas Cowboys", "Golden State Warriors", "Chicago Bulls",
                ],
            ),
            (
                "Events",
                &[
                    "FIFA World Cup", "Olympics", "Super Bowl", "UEFA Champions League",
                    "Wimbledon", "NBA Finals", "Formula 1 World Championship",
                ],
            ),
        ],
    ),
    (
        "Brands",
        &[
            (
                "Fashion",
                &[
                    "Louis Vuitton", "Gucci", "Nike", "Adidas", "Rolex", "Hermès", "Chanel",
                    "Prada", "Supreme", "Off-White",
                ],
            ),
            (
                "Tech",
                &[
                    "Apple", "Samsung", "Google", "Microsoft", "Amazon", "Meta", "NVIDIA",
                    "Tesla", "Sony", "Intel",
                ],
            ),
            (
                "Food",
                &[
                    "McDonald's", "Starbucks", "Coca-Cola", "PepsiCo", "KFC", "Subway",
                    "Domino's Pizza", "Burger King",
                ],
            ),
        ],
    ),
];

/// Inclusive (min, max) monthly search volume per category.
pub(crate) const VOLUME_RANGES: &[(&str, u64, u64)] = &[
    ("Celebrities", 500_000_000, 2_000_000_000),
    ("Technology", 300_000_000, 1_500_000_000),
    ("Automotive", 200_000_000, 1_000_000_000),
    ("Entertainment", 400_000_000, 1_800_000_000),
    ("Sports", 300_000_000, 1_600_000_000),
    ("Brands", 400_000_000, 1_700_000_000),
];

pub(crate) const DEFAULT_VOLUME_RANGE: (u64, u64) = (200_000_000, 1_000_000_000);

macro_rules! unsplash_photo {
    ($id:literal) => {
        concat!("https://images.unsplash.com/photo-", $id, "?auto=format&fit=crop&w=1200&h=800&q=85")
    };
}

/// One canonical image per (category, subcategory).
pub(crate) const FALLBACK_IMAGES: &[(&str, &[(&str, &str)])] = &[
    (
        "Celebrities",
        &[
            ("Actors", unsplash_photo!("1594909122845-11baa439b7bf")),
            ("Musicians", unsplash_photo!("1511671782779-c97d3d27a1d4")),
            ("Athletes", unsplash_photo!("1461896836934-ffe607ba8211")),
        ],
    ),
    (
        "Technology",
        &[
            ("Smartphones", unsplash_photo!("1592434134753-a70d6f61d37c")),
            ("Gaming", unsplash_photo!("1612287230202-1ff1d85d1bdf")),
            ("Software", unsplash_photo!("1555066931-4365d14bab8c")),
        ],
    ),
    (
        "Automotive",
        &[
            ("Luxury", unsplash_photo!("1503376780353-7e6692767b70")),
            ("Electric", unsplash_photo!("1560958089-b8a1929cea89")),
            ("Sports", unsplash_photo!("1614200187524-dc4b892acf16")),
        ],
    ),
    (
        "Entertainment",
        &[
            ("Movies", unsplash_photo!("1489599849927-2ee91cede3ba")),
            ("TVShows", unsplash_photo!("1522869635100-9f4c5e86aa37")),
            ("Games", unsplash_photo!("1538481199705-c710c4e965fc")),
        ],
    ),
    (
        "Sports",
        &[
            ("Teams", unsplash_photo!("1556056504-5c7696c4c28d")),
            ("Events", unsplash_photo!("1461896836934-ffe607ba8211")),
        ],
    ),
    (
        "Brands",
        &[
            ("Fashion", unsplash_photo!("1445205170230-053b83016050")),
            ("Tech", unsplash_photo!("1498049794561-7780e7231661")),
            ("Food", unsplash_photo!("1504674900247-0877df9cc836")),
        ],
    ),
];

/// Used when a (category, subcategory) has no registered fallback, and by the
/// item factory when image resolution blows up.
pub const UNIVERSAL_FALLBACK_IMAGE: &str = unsplash_photo!("1618005182384-a83a8bd57fbe");

/// Curated search queries for terms where the category template finds poor matches.
pub(crate) const QUERY_OVERRIDES: &[(&str, &str)] = &[
    // Actors
    ("Tom Cruise", "Tom Cruise actor portrait recent"),
    ("Brad Pitt", "Brad Pitt actor portrait recent"),
    ("Leonardo DiCaprio", "Leonardo DiCaprio actor portrait recent"),
    ("Jennifer Lawrence", "Jennifer Lawrence actress portrait recent"),
    ("Scarlett Johansson", "Scarlett Johansson actress portrait recent"),
    // Musicians
    ("Taylor Swift", "Taylor Swift singer recent"),
    ("Ed Sheeran", "Ed Sheeran performing recent"),
    ("Drake", "Drake rapper performing recent"),
    ("Beyoncé", "Beyonce singer performing recent"),
    ("BTS", "BTS group official recent"),
    // Athletes
    ("Cristiano Ronaldo", "Cristiano Ronaldo playing soccer recent"),
    ("Lionel Messi", "Lionel Messi playing soccer recent"),
    ("LeBron James", "LeBron James playing basketball Lakers"),
    // Products
    ("iPhone 15 Pro Max", "iPhone 15 Pro Max product official"),
    ("Samsung Galaxy S24 Ultra", "Samsung Galaxy S24 Ultra product official"),
    ("PlayStation 5", "PlayStation 5 console product"),
    ("Xbox Series X", "Xbox Series X console product"),
    ("Nintendo Switch OLED", "Nintendo Switch OLED product"),
    // Cars
    ("Tesla Model S Plaid", "Tesla Model S Plaid car official"),
    ("Porsche 911 GT3", "Porsche 911 GT3 car official"),
    ("Ferrari SF90", "Ferrari SF90 car official"),
    ("McLaren 720S", "McLaren 720S car official"),
    // Movies and shows
    ("Avatar", "Avatar Way of Water movie poster"),
    ("Avengers: Endgame", "Avengers Endgame movie poster"),
    ("Stranger Things", "Stranger Things show poster"),
    ("Game of Thrones", "Game of Thrones show poster"),
    ("Breaking Bad", "Breaking Bad show poster"),
    // Games
    ("Minecraft", "Minecraft game official"),
    ("GTA V", "Grand Theft Auto V game cover"),
    ("The Legend of Zelda", "Zelda Tears of Kingdom game"),
    ("Cyberpunk 2077", "Cyberpunk 2077 game cover"),
    // Teams
    ("Real Madrid", "Real Madrid soccer team logo"),
    ("Manchester United", "Manchester United soccer team logo"),
    ("Los Angeles Lakers", "LA Lakers basketball team logo"),
    // Brands
    ("Louis Vuitton", "Louis Vuitton logo store"),
    ("Gucci", "Gucci logo store"),
    ("Nike", "Nike logo store"),
    ("Apple", "Apple company logo"),
    ("McDonald's", "McDonalds restaurant logo"),
];
