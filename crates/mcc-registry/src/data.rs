//! Compiled-in ISO 18245 Merchant Category Code table.
//!
//! Each entry is `(code, description)`. Codes are unique and exactly four
//! ASCII digits; the registry checks both when it is built.

/// The MCC data set, in ascending code order.
pub(crate) const MCC_TABLE: &[(&str, &str)] = &[
    // Agricultural services
    ("0742", "Veterinary services"),
    ("0743", "Wine producers"),
    ("0744", "Champagne producers"),
    ("0763", "Agricultural co-operatives"),
    ("0780", "Landscaping and horticultural services"),
    // Contracted services
    ("1520", "General contractors: residential and commercial"),
    ("1711", "Heating, plumbing and air-conditioning contractors"),
    ("1731", "Electrical contractors"),
    ("1740", "Masonry, stonework, tile setting, plastering and insulation contractors"),
    ("1750", "Carpentry contractors"),
    ("1761", "Roofing, siding and sheet metal work contractors"),
    ("1771", "Concrete work contractors"),
    ("1799", "Special trade contractors"),
    ("2741", "Miscellaneous publishing and printing services"),
    ("2791", "Typesetting, platemaking and related services"),
    ("2842", "Specialty cleaning, polishing and sanitation preparations"),
    // Airlines
    ("3000", "United Airlines"),
    ("3001", "American Airlines"),
    ("3005", "British Airways"),
    ("3006", "Japan Airlines"),
    ("3007", "Air France"),
    ("3008", "Lufthansa"),
    ("3009", "Air Canada"),
    ("3010", "KLM Royal Dutch Airlines"),
    ("3012", "Qantas"),
    ("3015", "Swiss International Air Lines"),
    ("3020", "Air India"),
    ("3026", "Emirates"),
    ("3034", "Etihad Airways"),
    ("3058", "Delta Air Lines"),
    ("3066", "Southwest Airlines"),
    ("3075", "Singapore Airlines"),
    ("3136", "Qatar Airways"),
    ("3256", "Alaska Airlines"),
    // Car rental
    ("3351", "Affiliated Auto Rental"),
    ("3357", "Hertz"),
    ("3366", "Budget Rent-a-Car"),
    ("3387", "Alamo Rent-a-Car"),
    ("3389", "Avis"),
    ("3393", "National Car Rental"),
    ("3405", "Enterprise Rent-a-Car"),
    // Lodging
    ("3501", "Holiday Inns"),
    ("3502", "Best Western Hotels"),
    ("3503", "Sheraton Hotels"),
    ("3504", "Hilton Hotels"),
    ("3509", "Marriott Hotels"),
    ("3530", "Renaissance Hotels"),
    ("3615", "Travelodge Motels"),
    ("3640", "Hyatt Hotels"),
    ("3649", "Radisson Hotels"),
    ("3665", "Hampton Inns"),
    // Transportation services
    ("4011", "Railroads"),
    ("4111", "Local and suburban commuter passenger transportation, including ferries"),
    ("4112", "Passenger railways"),
    ("4119", "Ambulance services"),
    ("4121", "Taxicabs and limousines"),
    ("4131", "Bus lines"),
    ("4214", "Motor freight carriers and trucking: local and long distance, moving and storage"),
    ("4215", "Courier services: air and ground, and freight forwarders"),
    ("4225", "Public warehousing and storage"),
    ("4411", "Steamship and cruise lines"),
    ("4457", "Boat rentals and leasing"),
    ("4468", "Marinas, marine service and supplies"),
    ("4511", "Airlines and air carriers"),
    ("4582", "Airports, flying fields and airport terminals"),
    ("4722", "Travel agencies and tour operators"),
    ("4723", "Package tour operators"),
    ("4784", "Tolls and bridge fees"),
    ("4789", "Transportation services"),
    // Utility services
    ("4812", "Telecommunication equipment and telephone sales"),
    ("4814", "Telecommunication services"),
    ("4816", "Computer network and information services"),
    ("4821", "Telegraph services"),
    ("4829", "Wire transfers and money orders"),
    ("4899", "Cable, satellite and other pay television and radio services"),
    ("4900", "Utilities: electric, gas, water and sanitary"),
    // Retail outlet services
    ("5013", "Motor vehicle supplies and new parts"),
    ("5021", "Office and commercial furniture"),
    ("5039", "Construction materials"),
    ("5044", "Photographic, photocopy, microfilm equipment and supplies"),
    ("5045", "Computers and computer peripheral equipment and software"),
    ("5046", "Commercial equipment"),
    ("5047", "Medical, dental, ophthalmic and hospital equipment and supplies"),
    ("5051", "Metal service centers and offices"),
    ("5065", "Electrical parts and equipment"),
    ("5072", "Hardware equipment and supplies"),
    ("5074", "Plumbing and heating equipment and supplies"),
    ("5085", "Industrial supplies"),
    ("5094", "Precious stones and metals, watches and jewelry"),
    ("5099", "Durable goods"),
    ("5111", "Stationery, office supplies and printing and writing paper"),
    ("5122", "Drugs, drug proprietaries and druggist sundries"),
    ("5131", "Piece goods, notions and other dry goods"),
    ("5137", "Uniforms and commercial clothing"),
    ("5139", "Commercial footwear"),
    ("5169", "Chemicals and allied products"),
    ("5172", "Petroleum and petroleum products"),
    ("5192", "Books, periodicals and newspapers"),
    ("5193", "Florists supplies, nursery stock and flowers"),
    ("5198", "Paints, varnishes and supplies"),
    ("5199", "Nondurable goods"),
    ("5200", "Home supply warehouse stores"),
    ("5211", "Lumber and building materials stores"),
    ("5231", "Glass, paint and wallpaper stores"),
    ("5251", "Hardware stores"),
    ("5261", "Nurseries and lawn and garden supply stores"),
    ("5262", "Garden supply stores"),
    ("5271", "Mobile home dealers"),
    ("5300", "Wholesale clubs"),
    ("5309", "Duty free stores"),
    ("5310", "Discount stores"),
    ("5311", "Department stores"),
    ("5331", "Variety stores"),
    ("5399", "Miscellaneous general merchandise"),
    ("5411", "Groceries and supermarkets"),
    ("5422", "Freezer and locker meat provisioners"),
    ("5441", "Candy, nut and confectionery stores"),
    ("5451", "Dairy products stores"),
    ("5462", "Bakeries"),
    ("5499", "Miscellaneous food stores: convenience stores and specialty markets"),
    ("5511", "Car and truck dealers: new and used, sales, service, repairs, parts and leasing"),
    ("5521", "Car and truck dealers: used only, sales, service, repairs, parts and leasing"),
    ("5531", "Auto and home supply stores"),
    ("5532", "Automotive tire stores"),
    ("5533", "Automotive parts and accessories stores"),
    ("5541", "Service stations"),
    ("5542", "Automated fuel dispensers"),
    ("5551", "Boat dealers"),
    ("5552", "Electric vehicle charging"),
    ("5561", "Camper, recreational and utility trailer dealers"),
    ("5571", "Motorcycle shops and dealers"),
    ("5592", "Motor home dealers"),
    ("5598", "Snowmobile dealers"),
    ("5599", "Miscellaneous automotive, aircraft and farm equipment dealers"),
    ("5611", "Men's and boys' clothing and accessories stores"),
    ("5621", "Women's ready-to-wear stores"),
    ("5631", "Women's accessory and specialty shops"),
    ("5641", "Children's and infants' wear stores"),
    ("5651", "Family clothing stores"),
    ("5655", "Sports and riding apparel stores"),
    ("5661", "Shoe stores"),
    ("5681", "Furriers and fur shops"),
    ("5691", "Men's and women's clothing stores"),
    ("5697", "Tailors, alterations and seamstresses"),
    ("5698", "Wig and toupee stores"),
    ("5699", "Miscellaneous apparel and accessory shops"),
    ("5712", "Furniture, home furnishings and equipment stores, except appliances"),
    ("5713", "Floor covering stores"),
    ("5714", "Drapery, window covering and upholstery stores"),
    ("5718", "Fireplaces, fireplace screens and accessories stores"),
    ("5719", "Miscellaneous home furnishing specialty stores"),
    ("5722", "Household appliance stores"),
    ("5732", "Electronics stores"),
    ("5733", "Music stores: musical instruments, pianos and sheet music"),
    ("5734", "Computer software stores"),
    ("5735", "Record stores"),
    ("5811", "Caterers"),
    ("5812", "Eating places and restaurants"),
    ("5813", "Drinking places: bars, taverns, nightclubs, cocktail lounges and discotheques"),
    ("5814", "Fast food restaurants"),
    ("5815", "Digital goods: books, movies and music"),
    ("5816", "Digital goods: games"),
    ("5817", "Digital goods: applications, excluding games"),
    ("5818", "Digital goods: large digital goods merchant"),
    ("5912", "Drug stores and pharmacies"),
    ("5921", "Package stores: beer, wine and liquor"),
    ("5931", "Used merchandise and secondhand stores"),
    ("5932", "Antique shops: sales, repairs and restoration services"),
    ("5933", "Pawn shops"),
    ("5935", "Wrecking and salvage yards"),
    ("5937", "Antique reproductions"),
    ("5940", "Bicycle shops: sales and service"),
    ("5941", "Sporting goods stores"),
    ("5942", "Book stores"),
    ("5943", "Stationery, office and school supply stores"),
    ("5944", "Jewelry, watch, clock and silverware stores"),
    ("5945", "Hobby, toy and game shops"),
    ("5946", "Camera and photographic supply stores"),
    ("5947", "Gift, card, novelty and souvenir shops"),
    ("5948", "Luggage and leather goods stores"),
    ("5949", "Sewing, needlework, fabric and piece goods stores"),
    ("5950", "Glassware and crystal stores"),
    ("5960", "Direct marketing: insurance services"),
    ("5961", "Mail order houses including catalog order stores"),
    ("5962", "Direct marketing: travel related arrangement services"),
    ("5963", "Door-to-door sales"),
    ("5964", "Direct marketing: catalog merchants"),
    ("5965", "Direct marketing: combination catalog and retail merchants"),
    ("5966", "Direct marketing: outbound telemarketing merchants"),
    ("5967", "Direct marketing: inbound teleservices merchants"),
    ("5968", "Direct marketing: continuity and subscription merchants"),
    ("5969", "Direct marketing: other direct marketers"),
    ("5970", "Artist's supply and craft shops"),
    ("5971", "Art dealers and galleries"),
    ("5972", "Stamp and coin stores"),
    ("5973", "Religious goods stores"),
    ("5975", "Hearing aids: sales, service and supply stores"),
    ("5976", "Orthopedic goods and prosthetic devices"),
    ("5977", "Cosmetic stores"),
    ("5978", "Typewriter stores: sales, rental and service"),
    ("5983", "Fuel dealers: fuel oil, wood, coal and liquefied petroleum"),
    ("5992", "Florists"),
    ("5993", "Cigar stores and stands"),
    ("5994", "News dealers and newsstands"),
    ("5995", "Pet shops, pet food and supplies stores"),
    ("5996", "Swimming pools: sales, supplies and services"),
    ("5997", "Electric razor stores: sales and service"),
    ("5998", "Tent and awning shops"),
    ("5999", "Miscellaneous and specialty retail stores"),
    // Financial services
    ("6010", "Manual cash disbursements"),
    ("6011", "Automated cash disbursements"),
    ("6012", "Financial institutions: merchandise and services"),
    ("6050", "Quasi-cash: member financial institutions"),
    ("6051", "Quasi-cash: foreign currency, money orders and travelers cheques"),
    ("6211", "Security brokers and dealers"),
    ("6300", "Insurance sales, underwriting and premiums"),
    ("6381", "Insurance premiums"),
    ("6399", "Insurance"),
    ("6513", "Real estate agents and managers: rentals"),
    ("6529", "Remote stored value load: member financial institution"),
    ("6530", "Remote stored value load: merchant"),
    ("6531", "Payment service provider: money transfer for a purchase"),
    ("6532", "Payment transaction: member financial institution"),
    ("6533", "Payment transaction: merchant"),
    ("6534", "Money transfer: member financial institution"),
    ("6535", "Value purchase: member financial institution"),
    ("6536", "MoneySend intracountry"),
    ("6537", "MoneySend intercountry"),
    ("6538", "MoneySend funding"),
    ("6540", "Stored value card purchase and load"),
    // Lodging and personal services
    ("7011", "Lodging: hotels, motels and resorts"),
    ("7012", "Timeshares"),
    ("7032", "Sporting and recreational camps"),
    ("7033", "Trailer parks and campgrounds"),
    ("7210", "Laundry, cleaning and garment services"),
    ("7211", "Laundries: family and commercial"),
    ("7216", "Dry cleaners"),
    ("7217", "Carpet and upholstery cleaning"),
    ("7221", "Photographic studios"),
    ("7230", "Beauty and barber shops"),
    ("7251", "Shoe repair shops, shoe shine parlors and hat cleaning shops"),
    ("7261", "Funeral services and crematories"),
    ("7273", "Dating and escort services"),
    ("7276", "Tax preparation services"),
    ("7277", "Counseling services: debt, marriage and personal"),
    ("7278", "Buying and shopping services and clubs"),
    ("7295", "Babysitting services"),
    ("7296", "Clothing rental: costumes, uniforms and formal wear"),
    ("7297", "Massage parlors"),
    ("7298", "Health and beauty spas"),
    ("7299", "Miscellaneous personal services"),
    // Business services
    ("7311", "Advertising services"),
    ("7321", "Consumer credit reporting agencies"),
    ("7332", "Blueprinting and photocopying services"),
    ("7333", "Commercial photography, art and graphics"),
    ("7338", "Quick copy, reproduction and blueprinting services"),
    ("7339", "Stenographic and secretarial support services"),
    ("7342", "Exterminating and disinfecting services"),
    ("7349", "Cleaning, maintenance and janitorial services"),
    ("7361", "Employment agencies and temporary help services"),
    ("7372", "Computer programming, data processing and integrated systems design services"),
    ("7375", "Information retrieval services"),
    ("7379", "Computer maintenance, repair and services"),
    ("7392", "Management, consulting and public relations services"),
    ("7393", "Detective agencies, protective agencies and security services"),
    ("7394", "Equipment, tool, furniture and appliance rental and leasing"),
    ("7395", "Photofinishing laboratories and photo developing"),
    ("7399", "Miscellaneous business services"),
    // Automotive services
    ("7511", "Truck stop"),
    ("7512", "Automobile rental agency"),
    ("7513", "Truck and utility trailer rentals"),
    ("7519", "Motor home and recreational vehicle rentals"),
    ("7523", "Parking lots and garages"),
    ("7531", "Automotive body repair shops"),
    ("7534", "Tire retreading and repair shops"),
    ("7535", "Automotive paint shops"),
    ("7538", "Automotive service shops"),
    ("7542", "Car washes"),
    ("7549", "Towing services"),
    // Repair services
    ("7622", "Electronics repair shops"),
    ("7623", "Air conditioning and refrigeration repair shops"),
    ("7629", "Electrical and small appliance repair shops"),
    ("7631", "Watch, clock and jewelry repair"),
    ("7641", "Furniture reupholstery, repair and refinishing"),
    ("7692", "Welding repair"),
    ("7699", "Miscellaneous repair shops and related services"),
    // Amusement and entertainment
    ("7800", "Government-owned lotteries"),
    ("7801", "Government licensed online casinos"),
    ("7802", "Government licensed horse and dog racing"),
    ("7829", "Motion picture and video tape production and distribution"),
    ("7832", "Motion picture theaters"),
    ("7841", "Video tape rental stores"),
    ("7911", "Dance halls, studios and schools"),
    ("7922", "Theatrical producers and ticket agencies"),
    ("7929", "Bands, orchestras and miscellaneous entertainers"),
    ("7932", "Billiard and pool establishments"),
    ("7933", "Bowling alleys"),
    ("7941", "Commercial sports, professional sports clubs, athletic fields and sports promoters"),
    ("7991", "Tourist attractions and exhibits"),
    ("7992", "Public golf courses"),
    ("7993", "Video amusement game supplies"),
    ("7994", "Video game arcades and establishments"),
    ("7995", "Betting, including lottery tickets and casino gaming chips"),
    ("7996", "Amusement parks, circuses, carnivals and fortune tellers"),
    ("7997", "Membership clubs: sports, recreation, athletic, country clubs and private golf courses"),
    ("7998", "Aquariums, seaquariums and dolphinariums"),
    ("7999", "Miscellaneous recreation services"),
    // Professional services and membership organizations
    ("8011", "Doctors and physicians"),
    ("8021", "Dentists and orthodontists"),
    ("8031", "Osteopaths"),
    ("8041", "Chiropractors"),
    ("8042", "Optometrists and ophthalmologists"),
    ("8043", "Opticians, optical goods and eyeglasses"),
    ("8049", "Podiatrists and chiropodists"),
    ("8050", "Nursing and personal care facilities"),
    ("8062", "Hospitals"),
    ("8071", "Medical and dental laboratories"),
    ("8099", "Medical services and health practitioners"),
    ("8111", "Legal services and attorneys"),
    ("8211", "Elementary and secondary schools"),
    ("8220", "Colleges, universities, professional schools and junior colleges"),
    ("8241", "Correspondence schools"),
    ("8244", "Business and secretarial schools"),
    ("8249", "Vocational and trade schools"),
    ("8299", "Schools and educational services"),
    ("8351", "Child care services"),
    ("8398", "Charitable and social service organizations"),
    ("8641", "Civic, social and fraternal associations"),
    ("8651", "Political organizations"),
    ("8661", "Religious organizations"),
    ("8675", "Automobile associations"),
    ("8699", "Membership organizations"),
    ("8734", "Testing laboratories, non-medical"),
    ("8911", "Architectural, engineering and surveying services"),
    ("8931", "Accounting, auditing and bookkeeping services"),
    ("8999", "Professional services"),
    // Government services
    ("9211", "Court costs, including alimony and child support"),
    ("9222", "Fines"),
    ("9223", "Bail and bond payments"),
    ("9311", "Tax payments"),
    ("9399", "Government services"),
    ("9402", "Postal services: government only"),
    ("9405", "Intra-government purchases: government only"),
    ("9950", "Intra-company purchases"),
];
