//! Built-in industry taxonomy used to suggest starter categories.
//!
//! Each industry maps to a fixed list of categories, each carrying a handful
//! of sample product names. `Other` (and any key this build does not know)
//! has no suggestions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndustryKey {
    Retail,
    Restaurant,
    Warehouse,
    Pharmacy,
    Electronics,
    Clothing,
    Grocery,
    Hardware,
    Automotive,
    Other,
}

impl IndustryKey {
    pub const ALL: [IndustryKey; 10] = [
        IndustryKey::Retail,
        IndustryKey::Restaurant,
        IndustryKey::Warehouse,
        IndustryKey::Pharmacy,
        IndustryKey::Electronics,
        IndustryKey::Clothing,
        IndustryKey::Grocery,
        IndustryKey::Hardware,
        IndustryKey::Automotive,
        IndustryKey::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IndustryKey::Retail => "retail",
            IndustryKey::Restaurant => "restaurant",
            IndustryKey::Warehouse => "warehouse",
            IndustryKey::Pharmacy => "pharmacy",
            IndustryKey::Electronics => "electronics",
            IndustryKey::Clothing => "clothing",
            IndustryKey::Grocery => "grocery",
            IndustryKey::Hardware => "hardware",
            IndustryKey::Automotive => "automotive",
            IndustryKey::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IndustryKey::Retail => "Retail",
            IndustryKey::Restaurant => "Restaurant",
            IndustryKey::Warehouse => "Distribution",
            IndustryKey::Pharmacy => "Healthcare",
            IndustryKey::Electronics => "Electronics",
            IndustryKey::Clothing => "Fashion",
            IndustryKey::Grocery => "Grocery Store",
            IndustryKey::Hardware => "Hardware",
            IndustryKey::Automotive => "Automotive",
            IndustryKey::Other => "Other",
        }
    }

    /// Parses a key, mapping anything unrecognised to `Other`.
    pub fn parse_lossy(raw: &str) -> Self {
        raw.parse().unwrap_or(IndustryKey::Other)
    }
}

impl FromStr for IndustryKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        IndustryKey::ALL
            .into_iter()
            .find(|k| k.as_str() == key)
            .ok_or_else(|| format!("unknown industry: {s}"))
    }
}

impl fmt::Display for IndustryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CategorySuggestion {
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub sample_products: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct IndustryOption {
    pub value: IndustryKey,
    pub label: &'static str,
}

const fn suggestion(
    name: &'static str,
    description: &'static str,
    sample_products: &'static [&'static str],
) -> CategorySuggestion {
    CategorySuggestion {
        name,
        description: Some(description),
        sample_products,
    }
}

pub fn suggested_categories(industry: IndustryKey) -> &'static [CategorySuggestion] {
    match industry {
        IndustryKey::Retail => RETAIL,
        IndustryKey::Restaurant => RESTAURANT,
        IndustryKey::Warehouse => WAREHOUSE,
        IndustryKey::Pharmacy => PHARMACY,
        IndustryKey::Electronics => ELECTRONICS,
        IndustryKey::Clothing => CLOTHING,
        IndustryKey::Grocery => GROCERY,
        IndustryKey::Hardware => HARDWARE,
        IndustryKey::Automotive => AUTOMOTIVE,
        IndustryKey::Other => &[],
    }
}

pub fn all_industries() -> Vec<IndustryOption> {
    IndustryKey::ALL
        .into_iter()
        .map(|value| IndustryOption { value, label: value.display_name() })
        .collect()
}

const RETAIL: &[CategorySuggestion] = &[
    suggestion(
        "Electronics",
        "Electronic devices and accessories",
        &["Laptop", "Smartphone", "Headphones", "Tablet", "Charging Cable"],
    ),
    suggestion(
        "Clothing",
        "Apparel and fashion items",
        &["T-Shirt", "Jeans", "Jacket", "Shoes", "Accessories"],
    ),
    suggestion(
        "Home & Garden",
        "Home improvement and garden supplies",
        &["Garden Tools", "Furniture", "Decorations", "Lighting", "Plants"],
    ),
    suggestion(
        "Beauty & Personal Care",
        "Cosmetics and personal hygiene products",
        &["Shampoo", "Soap", "Perfume", "Makeup", "Skincare"],
    ),
    suggestion(
        "Sports & Outdoors",
        "Sports equipment and outdoor gear",
        &["Bicycle", "Tennis Racket", "Camping Tent", "Running Shoes", "Yoga Mat"],
    ),
    suggestion(
        "Toys & Games",
        "Toys, games, and entertainment items",
        &["Board Games", "Action Figures", "Puzzles", "Dolls", "Building Blocks"],
    ),
    suggestion(
        "Books & Media",
        "Books, magazines, and media products",
        &["Novels", "Cookbooks", "Children's Books", "DVDs", "Magazines"],
    ),
    suggestion(
        "Kitchen & Dining",
        "Kitchenware and dining essentials",
        &["Cookware Set", "Dinner Plates", "Cutlery", "Coffee Maker", "Blender"],
    ),
    suggestion(
        "Health & Wellness",
        "Health supplements and wellness products",
        &["Vitamins", "Protein Powder", "Fitness Tracker", "Massage Oil", "Essential Oils"],
    ),
];

const RESTAURANT: &[CategorySuggestion] = &[
    suggestion(
        "Food & Beverages",
        "Food items and drinks",
        &["Pasta", "Rice", "Cooking Oil", "Spices", "Beverages"],
    ),
    suggestion(
        "Kitchen Supplies",
        "Kitchen equipment and utensils",
        &["Plates", "Cutlery", "Cooking Pots", "Cleaning Supplies", "Napkins"],
    ),
    suggestion(
        "Fresh Produce",
        "Fresh fruits and vegetables",
        &["Tomatoes", "Lettuce", "Onions", "Potatoes", "Carrots"],
    ),
    suggestion(
        "Meat & Seafood",
        "Fresh and frozen meat products",
        &["Chicken Breast", "Beef Steak", "Salmon", "Pork Chops", "Shrimp"],
    ),
    suggestion(
        "Dairy & Eggs",
        "Dairy products and eggs",
        &["Milk", "Cheese", "Butter", "Eggs", "Yogurt"],
    ),
    suggestion(
        "Bakery Items",
        "Bread, pastries, and baked goods",
        &["Bread Loaf", "Croissants", "Muffins", "Bagels", "Dinner Rolls"],
    ),
    suggestion(
        "Beverages & Drinks",
        "Non-alcoholic and alcoholic beverages",
        &["Soft Drinks", "Juice", "Coffee Beans", "Tea", "Wine"],
    ),
    suggestion(
        "Frozen Foods",
        "Frozen food items",
        &["Frozen Vegetables", "Ice Cream", "Frozen Pizza", "Frozen Fries", "Frozen Meals"],
    ),
    suggestion(
        "Condiments & Sauces",
        "Sauces, condiments, and dressings",
        &["Ketchup", "Mustard", "Mayonnaise", "Hot Sauce", "Salad Dressing"],
    ),
];

const WAREHOUSE: &[CategorySuggestion] = &[
    suggestion(
        "Raw Materials",
        "Raw materials and components",
        &["Steel Sheets", "Plastic Pellets", "Wood Planks", "Fabric Rolls", "Components"],
    ),
    suggestion(
        "Packaging",
        "Packaging materials",
        &["Boxes", "Bubble Wrap", "Tape", "Labels", "Pallets"],
    ),
    suggestion(
        "Finished Goods",
        "Completed products ready for shipment",
        &["Product A", "Product B", "Product C", "Product D", "Product E"],
    ),
    suggestion(
        "Electronics Components",
        "Electronic parts and components",
        &["Circuit Boards", "Wires", "Connectors", "Batteries", "Sensors"],
    ),
    suggestion(
        "Textiles & Fabrics",
        "Fabric and textile materials",
        &["Cotton Fabric", "Polyester", "Leather", "Wool", "Synthetic Materials"],
    ),
    suggestion(
        "Hardware & Fasteners",
        "Hardware items and fastening materials",
        &["Screws", "Bolts", "Nails", "Rivets", "Washers"],
    ),
    suggestion(
        "Chemicals & Supplies",
        "Chemical products and industrial supplies",
        &["Cleaning Chemicals", "Lubricants", "Adhesives", "Solvents", "Sealants"],
    ),
    suggestion(
        "Tools & Equipment",
        "Warehouse tools and equipment",
        &["Forklift Parts", "Hand Trucks", "Pallet Jacks", "Scales", "Label Printers"],
    ),
    suggestion(
        "Safety Equipment",
        "Safety and protective equipment",
        &["Hard Hats", "Safety Vests", "Gloves", "Safety Glasses", "First Aid Kits"],
    ),
];

const PHARMACY: &[CategorySuggestion] = &[
    suggestion(
        "Prescription Medications",
        "Prescription drugs",
        &["Antibiotics", "Blood Pressure Medication", "Diabetes Medication", "Pain Management", "Heart Medication"],
    ),
    suggestion(
        "Over-the-Counter",
        "OTC health products",
        &["Pain Relievers", "Vitamins", "First Aid", "Cough Syrup", "Bandages"],
    ),
    suggestion(
        "Health & Wellness",
        "Wellness and personal care",
        &["Supplements", "Skincare", "Hygiene Products", "Medical Devices", "Probiotics"],
    ),
    suggestion(
        "Baby Care",
        "Infant and baby care products",
        &["Baby Formula", "Diapers", "Baby Wipes", "Baby Shampoo", "Baby Lotion"],
    ),
    suggestion(
        "Personal Care",
        "Personal hygiene and care items",
        &["Toothpaste", "Shampoo", "Deodorant", "Soap", "Body Wash"],
    ),
    suggestion(
        "Medical Supplies",
        "Medical equipment and supplies",
        &["Thermometers", "Blood Pressure Monitors", "Glucose Meters", "Nebulizers", "Stethoscopes"],
    ),
    suggestion(
        "Nutrition & Supplements",
        "Nutritional supplements and vitamins",
        &["Multivitamins", "Protein Supplements", "Omega-3", "Calcium", "Iron Supplements"],
    ),
    suggestion(
        "Skincare & Cosmetics",
        "Skincare and cosmetic products",
        &["Moisturizers", "Sunscreen", "Anti-aging Cream", "Acne Treatment", "Face Masks"],
    ),
    suggestion(
        "Home Health Care",
        "Home healthcare products",
        &["Wheelchairs", "Walkers", "Compression Stockings", "Hot/Cold Packs", "Orthopedic Supports"],
    ),
];

const ELECTRONICS: &[CategorySuggestion] = &[
    suggestion(
        "Computers & Laptops",
        "Computer hardware",
        &["Desktop PC", "Laptop", "Monitor", "Keyboard", "Mouse"],
    ),
    suggestion(
        "Mobile Devices",
        "Smartphones and tablets",
        &["Smartphone", "Tablet", "Smartwatch", "Earbuds", "Chargers"],
    ),
    suggestion(
        "Accessories",
        "Electronic accessories",
        &["Cables", "Cases", "Screen Protectors", "Stands", "Power Banks"],
    ),
    suggestion(
        "Audio Equipment",
        "Audio and sound equipment",
        &["Headphones", "Speakers", "Soundbars", "Microphones", "Amplifiers"],
    ),
    suggestion(
        "TV & Home Theater",
        "Televisions and home theater systems",
        &["Smart TV", "Sound System", "Streaming Device", "TV Mount", "Projector"],
    ),
    suggestion(
        "Gaming",
        "Gaming consoles and accessories",
        &["Gaming Console", "Gaming Mouse", "Gaming Keyboard", "Game Controller", "Gaming Headset"],
    ),
    suggestion(
        "Cameras & Photography",
        "Cameras and photography equipment",
        &["Digital Camera", "DSLR", "Action Camera", "Camera Lens", "Tripod"],
    ),
    suggestion(
        "Smart Home",
        "Smart home devices and automation",
        &["Smart Speaker", "Smart Light Bulbs", "Security Camera", "Smart Thermostat", "Smart Doorbell"],
    ),
    suggestion(
        "Storage & Memory",
        "Data storage and memory devices",
        &["USB Drive", "External Hard Drive", "SSD", "Memory Card", "Cloud Storage Device"],
    ),
];

const CLOTHING: &[CategorySuggestion] = &[
    suggestion(
        "Men's Clothing",
        "Men's apparel",
        &["Men's Shirt", "Men's Pants", "Men's Jacket", "Men's Shoes", "Men's Shorts"],
    ),
    suggestion(
        "Women's Clothing",
        "Women's apparel",
        &["Women's Dress", "Women's Blouse", "Women's Jeans", "Women's Shoes", "Women's Skirt"],
    ),
    suggestion(
        "Accessories",
        "Fashion accessories",
        &["Bags", "Belts", "Jewelry", "Hats", "Sunglasses"],
    ),
    suggestion(
        "Children's Clothing",
        "Kids and children's apparel",
        &["Kids T-Shirt", "Kids Jeans", "Kids Dress", "Kids Shoes", "Kids Jacket"],
    ),
    suggestion(
        "Activewear",
        "Sports and activewear clothing",
        &["Athletic Shorts", "Sports Bra", "Yoga Pants", "Running Shirt", "Gym Bag"],
    ),
    suggestion(
        "Underwear & Lingerie",
        "Underwear and intimate apparel",
        &["Boxers", "Briefs", "Bras", "Underwear", "Socks"],
    ),
    suggestion(
        "Outerwear",
        "Coats, jackets, and outerwear",
        &["Winter Coat", "Rain Jacket", "Leather Jacket", "Windbreaker", "Parka"],
    ),
    suggestion(
        "Footwear",
        "Shoes and footwear",
        &["Sneakers", "Boots", "Sandals", "Dress Shoes", "Flip Flops"],
    ),
    suggestion(
        "Swimwear",
        "Swimming and beachwear",
        &["Swim Trunks", "Bikini", "One-Piece Swimsuit", "Beach Cover-Up", "Rash Guard"],
    ),
];

const GROCERY: &[CategorySuggestion] = &[
    suggestion(
        "Fresh Produce",
        "Fresh fruits and vegetables",
        &["Apples", "Bananas", "Lettuce", "Tomatoes", "Carrots"],
    ),
    suggestion(
        "Dairy Products",
        "Dairy and eggs",
        &["Milk", "Cheese", "Yogurt", "Butter", "Eggs"],
    ),
    suggestion(
        "Pantry Items",
        "Dry goods and canned items",
        &["Pasta", "Rice", "Canned Goods", "Cereal", "Flour"],
    ),
    suggestion(
        "Meat & Seafood",
        "Fresh and packaged meat products",
        &["Ground Beef", "Chicken Breast", "Salmon Fillet", "Pork Chops", "Shrimp"],
    ),
    suggestion(
        "Bakery",
        "Fresh baked goods and bread",
        &["White Bread", "Whole Wheat Bread", "Bagels", "Croissants", "Muffins"],
    ),
    suggestion(
        "Beverages",
        "Drinks and beverages",
        &["Water", "Soft Drinks", "Juice", "Coffee", "Tea"],
    ),
    suggestion(
        "Frozen Foods",
        "Frozen food products",
        &["Frozen Vegetables", "Ice Cream", "Frozen Pizza", "Frozen Meals", "Frozen Fruits"],
    ),
    suggestion(
        "Snacks & Confectionery",
        "Snacks, chips, and sweets",
        &["Potato Chips", "Chocolate Bars", "Cookies", "Crackers", "Nuts"],
    ),
    suggestion(
        "Organic & Health Foods",
        "Organic and health-focused products",
        &["Organic Vegetables", "Gluten-Free Products", "Plant-Based Alternatives", "Superfoods", "Health Bars"],
    ),
];

const HARDWARE: &[CategorySuggestion] = &[
    suggestion(
        "Tools",
        "Hand and power tools",
        &["Hammer", "Drill", "Screwdriver Set", "Wrench", "Saw"],
    ),
    suggestion(
        "Building Materials",
        "Construction materials",
        &["Nails", "Screws", "Wood Planks", "Paint", "Tiles"],
    ),
    suggestion(
        "Hardware Supplies",
        "General hardware items",
        &["Locks", "Hinges", "Bolts", "Rope", "Tape"],
    ),
    suggestion(
        "Electrical Supplies",
        "Electrical components and wiring",
        &["Electrical Wire", "Light Switches", "Outlet Plugs", "Circuit Breakers", "LED Bulbs"],
    ),
    suggestion(
        "Plumbing",
        "Plumbing supplies and fixtures",
        &["Pipe Fittings", "Faucets", "Toilet Parts", "Pipe Wrenches", "Plumber's Tape"],
    ),
    suggestion(
        "Paint & Supplies",
        "Paint and painting supplies",
        &["Interior Paint", "Exterior Paint", "Paint Brushes", "Rollers", "Paint Thinner"],
    ),
    suggestion(
        "Garden & Outdoor",
        "Garden tools and outdoor supplies",
        &["Garden Hose", "Shovels", "Lawn Mower", "Garden Tools", "Plant Pots"],
    ),
    suggestion(
        "Safety Equipment",
        "Safety and protective gear",
        &["Safety Glasses", "Work Gloves", "Hard Hats", "Ear Protection", "Safety Vests"],
    ),
    suggestion(
        "Storage & Organization",
        "Storage solutions and organization",
        &["Toolboxes", "Shelving Units", "Storage Bins", "Cabinets", "Hooks"],
    ),
];

const AUTOMOTIVE: &[CategorySuggestion] = &[
    suggestion(
        "Engine Parts",
        "Engine components",
        &["Oil Filter", "Spark Plugs", "Air Filter", "Battery", "Belts"],
    ),
    suggestion(
        "Body Parts",
        "Exterior and body components",
        &["Bumper", "Headlight", "Mirror", "Door Handle", "Windshield"],
    ),
    suggestion(
        "Accessories",
        "Automotive accessories",
        &["Floor Mats", "Car Cover", "Phone Mount", "USB Charger", "Air Freshener"],
    ),
    suggestion(
        "Brake System",
        "Brake components and parts",
        &["Brake Pads", "Brake Rotors", "Brake Fluid", "Brake Lines", "Brake Calipers"],
    ),
    suggestion(
        "Suspension & Steering",
        "Suspension and steering components",
        &["Shock Absorbers", "Struts", "Tie Rods", "Control Arms", "Steering Wheel"],
    ),
    suggestion(
        "Tires & Wheels",
        "Tires, wheels, and related items",
        &["All-Season Tires", "Winter Tires", "Wheel Rims", "Tire Pressure Gauge", "Wheel Covers"],
    ),
    suggestion(
        "Electrical & Lighting",
        "Electrical components and lighting",
        &["Headlight Bulbs", "Tail Lights", "Fuses", "Alternator", "Starter Motor"],
    ),
    suggestion(
        "Interior Parts",
        "Interior components and trim",
        &["Seat Covers", "Dashboard Cover", "Steering Wheel Cover", "Carpet Mats", "Sun Visors"],
    ),
    suggestion(
        "Maintenance & Fluids",
        "Maintenance supplies and fluids",
        &["Motor Oil", "Coolant", "Transmission Fluid", "Windshield Washer Fluid", "Grease"],
    ),
];
