//! Static name and place pools for record synthesis.
//!
//! Given names are conditioned on gender; family names, cities, and region
//! codes are unconditioned. Pools are picked from uniformly, the same way the
//! profile-driven `one_of` style generators work elsewhere in the pipeline.

pub const MALE_GIVEN: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
    "Charles", "Daniel", "Matthew", "Anthony", "Mark", "Steven", "Andrew", "Paul", "Joshua",
    "Kenneth", "Kevin", "Brian", "George", "Edward", "Ronald", "Liam", "Noah", "Ethan", "Mason",
    "Lucas", "Oscar", "Leo", "Calvin",
];

pub const FEMALE_GIVEN: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica", "Sarah",
    "Karen", "Nancy", "Lisa", "Margaret", "Betty", "Sandra", "Ashley", "Dorothy", "Kimberly",
    "Emily", "Donna", "Michelle", "Carol", "Amanda", "Melissa", "Olivia", "Emma", "Ava", "Mia",
    "Isla", "Chloe", "Grace", "Freya",
];

pub const FAMILY: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores",
];

pub const CITIES: &[&str] = &[
    "Springfield", "Franklin", "Clinton", "Greenville", "Bristol", "Fairview", "Salem",
    "Madison", "Georgetown", "Arlington", "Ashland", "Dover", "Oxford", "Jackson", "Burlington",
    "Manchester", "Milton", "Newport", "Auburn", "Centerville", "Clayton", "Dayton", "Lexington",
    "Milford", "Riverside", "Cleveland", "Hudson", "Kingston", "Mount Vernon", "Oakland",
];

pub const REGION_CODES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY",
];
