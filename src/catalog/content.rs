//! Static phrase tables backing the selection modals.
//!
//! Every string here is clinician-facing text that lands verbatim in the
//! composed note, so edits to this file change documentation output.

use super::CatalogGroup;

pub(super) const PURPOSE_PAIN_MANAGEMENT: CatalogGroup = CatalogGroup {
    title: "Pain Management",
    phrases: &[
        "Reduce pain during functional activities",
        "Improve pain self-management strategies",
        "Decrease pain interference with daily tasks",
        "Improve tolerance to activity despite pain",
        "Educate on positioning for pain relief",
    ],
};

pub(super) const PURPOSE_COGNITIVE_FUNCTION: CatalogGroup = CatalogGroup {
    title: "Cognitive Function",
    phrases: &[
        "Improve attention to functional tasks",
        "Enhance problem-solving during daily activities",
        "Improve safety awareness during task performance",
        "Enhance memory strategies for daily routines",
        "Improve ability to follow multi-step directions",
    ],
};

pub(super) const PURPOSE_FUNCTIONAL_MOBILITY: CatalogGroup = CatalogGroup {
    title: "Functional Mobility",
    phrases: &[
        "Improve functional mobility",
        "Improve safety during functional transfers",
        "Increase independence with bed mobility",
        "Improve gait quality and efficiency",
        "Enhance ability to navigate home environment",
    ],
};

pub(super) const PURPOSE_STRENGTH_ENDURANCE: CatalogGroup = CatalogGroup {
    title: "Strength and Endurance",
    phrases: &[
        "Increase strength for functional activities",
        "Improve activity tolerance for daily tasks",
        "Increase endurance for community mobility",
        "Improve upper extremity strength for self-care",
        "Increase lower extremity strength for transfers",
    ],
};

pub(super) const PURPOSE_ADL: CatalogGroup = CatalogGroup {
    title: "Activities of Daily Living",
    phrases: &[
        "Increase independence in activities of daily living",
        "Improve safety during self-care tasks",
        "Enhance efficiency in daily routines",
        "Improve use of adaptive equipment for ADLs",
        "Increase participation in meaningful daily activities",
    ],
};

pub(super) const PURPOSE_DRESSING: CatalogGroup = CatalogGroup {
    title: "Dressing",
    phrases: &[
        "Improve independence in dressing tasks",
        "Enhance upper body dressing skills",
        "Improve lower body dressing techniques",
        "Increase efficiency in managing fasteners",
        "Enhance ability to select appropriate clothing",
    ],
};

pub(super) const PURPOSE_BATHING: CatalogGroup = CatalogGroup {
    title: "Bathing",
    phrases: &[
        "Increase independence in bathing activities",
        "Improve safety during bathing tasks",
        "Enhance upper body washing techniques",
        "Improve lower body washing skills",
        "Increase efficiency in water and soap management",
    ],
};

pub(super) const PURPOSE_GROOMING: CatalogGroup = CatalogGroup {
    title: "Grooming",
    phrases: &[
        "Enhance independence in grooming tasks",
        "Improve fine motor skills for grooming activities",
        "Increase efficiency in oral hygiene routines",
        "Enhance hair care techniques",
        "Improve management of grooming tools",
    ],
};

pub(super) const PURPOSE_BALANCE: CatalogGroup = CatalogGroup {
    title: "Balance",
    phrases: &[
        "Improve static balance",
        "Enhance dynamic balance during functional tasks",
        "Increase confidence in balance-challenging situations",
        "Improve postural control",
        "Enhance ability to recover from balance perturbations",
    ],
};

pub(super) const PURPOSE_COORDINATION: CatalogGroup = CatalogGroup {
    title: "Coordination",
    phrases: &[
        "Improve bilateral coordination",
        "Enhance fine motor coordination",
        "Improve gross motor coordination",
        "Increase accuracy in targeted movements",
        "Enhance timing and sequencing of movements",
    ],
};

pub(super) const INTERVENTION_GENERAL_STRATEGIES: CatalogGroup = CatalogGroup {
    title: "General Strategies",
    phrases: &[
        "Implemented task segmentation strategies to improve activity tolerance",
        "Practiced environmental modification techniques for improved safety and efficiency",
        "Facilitated problem-solving skills during novel task performance",
        "Training in energy conservation principles across various daily activities",
        "Incorporated dual-task activities to challenge cognitive-motor integration",
    ],
};

pub(super) const INTERVENTION_SELF_CARE_TECHNIQUES: CatalogGroup = CatalogGroup {
    title: "Self-Care Techniques",
    phrases: &[
        "Modified grooming routine to incorporate one-handed techniques",
        "Training in use of adaptive equipment for meal preparation tasks",
        "Practiced safe transfer techniques for bathroom activities",
        "Implemented compensatory strategies for managing fasteners during dressing",
        "Facilitated proper body mechanics during lower body hygiene tasks",
    ],
};

pub(super) const INTERVENTION_TOILETING: CatalogGroup = CatalogGroup {
    title: "Toileting",
    phrases: &[
        "Taught one-handed fastener management techniques",
        "Instructed in safe transfer methods using grab bars",
        "Demonstrated energy conservation techniques during toileting",
        "Practiced alternative wiping methods for improved hygiene",
        "Introduced seated position for clothing management tasks",
    ],
};

pub(super) const INTERVENTION_UPPER_BODY_DRESSING: CatalogGroup = CatalogGroup {
    title: "Upper Body Dressing",
    phrases: &[
        "Taught one-handed dressing techniques for affected side",
        "Instructed in energy conservation principles during dressing",
        "Demonstrated alternative methods for bra fastening",
        "Practiced seated dressing techniques for improved stability",
        "Introduced visual scanning strategies for garment orientation",
    ],
};

pub(super) const INTERVENTION_LOWER_BODY_DRESSING: CatalogGroup = CatalogGroup {
    title: "Lower Body Dressing",
    phrases: &[
        "Taught seated dressing techniques for improved stability",
        "Instructed in energy conservation principles during lower body dressing",
        "Demonstrated alternative methods for managing zippers and buttons",
        "Practiced one-handed techniques for affected lower extremity",
        "Introduced visual scanning strategies for proper garment orientation",
    ],
};

pub(super) const INTERVENTION_BATHING: CatalogGroup = CatalogGroup {
    title: "Bathing",
    phrases: &[
        "Taught seated bathing techniques for energy conservation",
        "Instructed in safe transfer methods for tub or shower entry/exit",
        "Demonstrated alternative washing techniques for hard-to-reach areas",
        "Practiced one-handed hair washing and rinsing methods",
        "Introduced systematic washing routine to ensure thorough cleaning",
    ],
};

pub(super) const INTERVENTION_GROOMING: CatalogGroup = CatalogGroup {
    title: "Grooming",
    phrases: &[
        "Taught one-handed hair brushing and styling techniques",
        "Instructed in energy conservation principles during grooming routine",
        "Demonstrated alternative methods for applying makeup or shaving",
        "Practiced seated grooming techniques for improved stability and endurance",
        "Introduced systematic grooming routine to ensure comprehensive care",
    ],
};

pub(super) const INTERVENTION_GAIT_TRAINING: CatalogGroup = CatalogGroup {
    title: "Gait Training",
    phrases: &[
        "Gait training",
        "Gait training on level surfaces with emphasis on step symmetry",
        "Gait training with assistive device on varied surfaces",
        "Practiced safe turning and direction changes during ambulation",
        "Incorporated dual-task demands during gait activities",
    ],
};

pub(super) const INTERVENTION_BALANCE_TRAINING: CatalogGroup = CatalogGroup {
    title: "Balance Training",
    phrases: &[
        "Static standing balance activities with progressive challenge",
        "Dynamic balance training during functional reaching tasks",
        "Weight shifting activities in standing",
        "Balance training on compliant surfaces",
        "Perturbation training to improve reactive balance strategies",
    ],
};

pub(super) const INTERVENTION_STRENGTHENING: CatalogGroup = CatalogGroup {
    title: "Strengthening",
    phrases: &[
        "Progressive resistance exercises for upper extremities",
        "Progressive resistance exercises for lower extremities",
        "Functional strengthening through sit-to-stand repetitions",
        "Core strengthening activities in supported positions",
        "Graded strengthening program with functional carryover tasks",
    ],
};

pub(super) const INTERVENTION_TRANSFERS: CatalogGroup = CatalogGroup {
    title: "Transfer Training",
    phrases: &[
        "Transfer training with emphasis on safe technique",
        "Practiced sit-to-stand transfers with graded support",
        "Bed mobility training with segmental rolling techniques",
        "Toilet transfer training using grab bars",
        "Car transfer simulation with sequencing cues",
    ],
};

pub(super) const OBSERVATION_GROUPS: &[CatalogGroup] = &[
    CatalogGroup {
        title: "Motor Control",
        phrases: &[
            "Demonstrated decreased coordination during bilateral tasks",
            "Exhibited impaired motor planning during sequence",
            "Showed limited fine motor control with manipulation",
            "Displayed difficulty with timing and force regulation",
            "Presented with decreased ability to perform smooth, controlled movements",
            "Demonstrated inconsistent motor patterns during repetitive tasks",
            "Exhibited delayed initiation of voluntary movements",
            "Showed impaired ability to isolate individual joint movements",
            "Displayed difficulty with graded muscle contractions",
            "Presented with decreased motor adaptation to changing task demands",
            "Demonstrated impaired ability to maintain consistent movement speed",
        ],
    },
    CatalogGroup {
        title: "Balance/Stability",
        phrases: &[
            "Demonstrated poor static standing balance",
            "Required increased time for postural adjustments",
            "Showed decreased weight shifting ability",
            "Exhibited difficulty maintaining balance during dynamic tasks",
            "Displayed impaired righting reactions when balance was challenged",
            "Demonstrated increased postural sway during quiet standing",
            "Exhibited difficulty integrating sensory information for balance",
            "Showed impaired anticipatory postural adjustments",
            "Displayed decreased limits of stability in all directions",
            "Presented with difficulty maintaining balance with altered visual input",
            "Demonstrated impaired ability to recover balance after perturbations",
        ],
    },
    CatalogGroup {
        title: "Safety Awareness",
        phrases: &[
            "Demonstrated poor safety judgment during tasks",
            "Required frequent cues for environmental awareness",
            "Showed decreased recognition of limitations",
            "Exhibited impulsive behaviors during activities",
            "Displayed difficulty anticipating potential hazards",
            "Demonstrated inconsistent use of safety equipment",
            "Exhibited decreased awareness of body position in space",
            "Showed impaired ability to recognize fatigue signals",
            "Displayed difficulty adapting behavior to changing environments",
            "Presented with decreased ability to identify potential risks in tasks",
            "Demonstrated poor judgment in estimating physical capabilities",
        ],
    },
    CatalogGroup {
        title: "Cognitive Function",
        phrases: &[
            "Demonstrated difficulty following multi-step commands",
            "Required increased time for task processing",
            "Showed decreased problem-solving ability",
            "Exhibited impaired attention to task details",
            "Displayed difficulty with task initiation and completion",
            "Demonstrated impaired working memory during functional tasks",
            "Exhibited difficulty with divided attention in complex environments",
            "Showed decreased ability to inhibit irrelevant stimuli",
            "Displayed impaired cognitive flexibility when switching between tasks",
            "Presented with difficulty in planning and sequencing multi-step activities",
            "Demonstrated decreased ability to generalize learned strategies to new situations",
        ],
    },
    CatalogGroup {
        title: "Endurance",
        phrases: &[
            "Demonstrated decreased activity tolerance",
            "Required frequent rest breaks during tasks",
            "Showed signs of fatigue with minimal exertion",
            "Exhibited decreased ability to sustain effort over time",
            "Displayed shortness of breath with light activities",
            "Demonstrated rapid onset of muscle fatigue during repetitive tasks",
            "Exhibited decreased endurance in maintaining postural control",
            "Showed impaired recovery rate following physical exertion",
            "Displayed decreased ability to maintain consistent performance over time",
            "Presented with reduced capacity for prolonged cognitive engagement",
            "Demonstrated difficulty managing energy expenditure across daily activities",
        ],
    },
];

pub(super) const PLAN_FUNCTIONAL_MOBILITY: CatalogGroup = CatalogGroup {
    title: "Functional Mobility",
    phrases: &[
        "Progress to more complex mobility tasks as appropriate",
        "Increase walking distance and duration for improved endurance",
        "Incorporate varied surfaces and environments in gait training",
        "Focus on improving transitional movements (e.g., sit-to-stand)",
        "Address stair navigation with emphasis on safety and efficiency",
        "Implement obstacle course training to challenge dynamic balance",
        "Practice functional reaching tasks in various positions",
        "Incorporate dual-task activities during mobility exercises",
        "Focus on improving speed and agility in movement patterns",
        "Address community mobility skills (e.g., curb management, uneven terrain)",
        "Integrate vestibular training exercises into mobility tasks",
    ],
};

pub(super) const PLAN_BALANCE_COORDINATION: CatalogGroup = CatalogGroup {
    title: "Balance and Coordination",
    phrases: &[
        "Challenge balance through progressive static and dynamic activities",
        "Incorporate dual-task demands to improve balance automaticity",
        "Implement perturbation training to enhance reactive balance",
        "Focus on improving coordination through task-specific training",
        "Utilize proprioceptive training to enhance body awareness",
    ],
};

pub(super) const PLAN_STRENGTH_ENDURANCE: CatalogGroup = CatalogGroup {
    title: "Strength and Endurance",
    phrases: &[
        "Progress resistance exercises for both upper and lower extremities",
        "Increase repetitions and sets of exercises as tolerated",
        "Incorporate functional strengthening activities into treatment",
        "Gradually increase duration of endurance activities",
        "Implement circuit training to address multiple areas simultaneously",
        "Introduce plyometric exercises to improve power and explosiveness",
        "Incorporate isometric holds to enhance muscular endurance",
        "Implement progressive resistance training using various equipment",
        "Focus on core strengthening exercises to improve overall stability",
        "Integrate high-intensity interval training (HIIT) for cardiovascular endurance",
        "Develop a home exercise program to maintain strength gains",
    ],
};

pub(super) const PLAN_SELF_CARE_ADLS: CatalogGroup = CatalogGroup {
    title: "Self-Care and ADLs",
    phrases: &[
        "Focus on increasing independence in dressing activities",
        "Address bathing and grooming tasks with emphasis on safety",
        "Improve efficiency and independence in toileting routines",
        "Practice meal preparation and feeding tasks as appropriate",
        "Incorporate energy conservation techniques in daily activities",
        "Implement adaptive equipment training for challenging ADLs",
        "Practice fine motor tasks related to grooming and self-care",
        "Address medication management skills and safety",
        "Incorporate home management tasks (e.g., laundry, light housekeeping)",
        "Focus on transfer techniques specific to home environment",
        "Implement strategies for managing fatigue during extended ADL tasks",
    ],
};

pub(super) const PLAN_COGNITIVE_SAFETY: CatalogGroup = CatalogGroup {
    title: "Cognitive and Safety Awareness",
    phrases: &[
        "Implement cognitive challenges during functional tasks",
        "Address safety awareness through simulated home environments",
        "Provide education on fall prevention strategies",
        "Practice problem-solving skills in various contexts",
        "Incorporate memory strategies into daily routines",
        "Introduce dual-task cognitive exercises during physical activities",
        "Implement visual scanning exercises to improve environmental awareness",
        "Practice sequencing complex tasks to enhance executive functioning",
        "Address time management skills in daily activities",
        "Incorporate mindfulness techniques to improve attention and focus",
        "Develop compensatory strategies for cognitive deficits in functional tasks",
    ],
};

pub(super) const ASSISTANCE_LEVELS: &[&str] = &[
    "Independent",
    "Modified Independent",
    "Supervision",
    "Contact Guard Assist",
    "Minimal Assist",
    "Moderate Assist",
    "Maximum Assist",
    "Total Assist",
];

pub(super) const REASON_GROUPS: &[CatalogGroup] = &[
    CatalogGroup {
        title: "Balance",
        phrases: &[
            "Impaired static balance",
            "Impaired dynamic balance",
            "Poor postural control",
            "Difficulty with weight shifting",
            "Instability during transitional movements",
        ],
    },
    CatalogGroup {
        title: "Strength",
        phrases: &[
            "Decreased upper extremity strength",
            "Decreased lower extremity strength",
            "Generalized weakness",
            "Reduced core strength",
            "Muscle fatigue during functional tasks",
        ],
    },
    CatalogGroup {
        title: "Coordination",
        phrases: &[
            "Impaired bilateral coordination",
            "Decreased motor control",
            "Poor movement planning",
            "Difficulty with sequencing of movements",
            "Impaired fine motor skills",
        ],
    },
    CatalogGroup {
        title: "Endurance",
        phrases: &[
            "Decreased activity tolerance",
            "Fatigue",
            "Cardiopulmonary limitations",
            "Reduced stamina during extended tasks",
            "Need for frequent rest breaks",
        ],
    },
    CatalogGroup {
        title: "Attention",
        phrases: &[
            "Impaired attention to task",
            "Difficulty maintaining focus",
            "Easily distracted by environmental stimuli",
            "Limited attention span",
            "Difficulty dividing attention between tasks",
        ],
    },
    CatalogGroup {
        title: "Memory",
        phrases: &[
            "Short-term memory deficits",
            "Difficulty recalling multi-step instructions",
            "Impaired working memory",
            "Difficulty with task sequencing",
            "Poor recall of safety precautions",
        ],
    },
    CatalogGroup {
        title: "Problem Solving",
        phrases: &[
            "Decreased problem-solving skills",
            "Difficulty generating solutions",
            "Impaired ability to anticipate obstacles",
            "Poor judgment in complex situations",
            "Difficulty adapting to changes in task demands",
        ],
    },
    CatalogGroup {
        title: "Safety",
        phrases: &[
            "Reduced safety awareness",
            "Impulsivity during task performance",
            "Difficulty recognizing environmental hazards",
            "Poor judgment of physical capabilities",
            "Inconsistent use of adaptive equipment",
        ],
    },
];

pub(super) const CUEING_LEVELS: &[&str] = &["Minimal", "Moderate", "Maximum"];

pub(super) const CUEING_TYPES: &[&str] = &[
    "Verbal cues",
    "Visual cues",
    "Tactile cues",
    "Gestural cues",
    "Environmental cues",
];

pub(super) const CUEING_REASON_GROUPS: &[CatalogGroup] = &[
    CatalogGroup {
        title: "Task Execution",
        phrases: &[
            "Task initiation",
            "Task continuation",
            "Task completion",
            "Proper technique",
            "Sequencing",
        ],
    },
    CatalogGroup {
        title: "Cognitive Functioning",
        phrases: &[
            "Attention to task",
            "Problem-solving",
            "Decision making",
            "Memory recall",
            "Information processing",
        ],
    },
    CatalogGroup {
        title: "Safety and Awareness",
        phrases: &[
            "Safety awareness",
            "Environmental awareness",
            "Body awareness",
            "Spatial awareness",
            "Use of adaptive equipment",
        ],
    },
    CatalogGroup {
        title: "Communication and Behavior",
        phrases: &[
            "Following instructions",
            "Appropriate social interaction",
            "Emotional regulation",
            "Self-monitoring",
            "Asking for help when needed",
        ],
    },
    CatalogGroup {
        title: "Physical Assistance",
        phrases: &[
            "Balance support",
            "Postural alignment",
            "Movement guidance",
            "Facilitation of proper form",
            "Assistance with weight shifting",
        ],
    },
    CatalogGroup {
        title: "Environmental Adaptation",
        phrases: &[
            "Setup of task environment",
            "Modification of tools or equipment",
            "Adjustment of task demands",
            "Pacing of activity",
            "Grading of task complexity",
        ],
    },
];

pub(super) const PROGRESS_INDICATOR_PHRASES: &[&str] = &[
    "demonstrated improved independence with",
    "showed increased efficiency during",
    "exhibited enhanced safety awareness during",
    "displayed better control during",
];

pub(super) const CONTINUING_NEED_PHRASES: &[&str] = &[
    "continued to require assistance for",
    "needed ongoing support with",
    "still requiring cues for",
    "maintained need for help with",
];

pub(super) const PERFORMANCE_COMPONENTS: &[CatalogGroup] = &[
    CatalogGroup {
        title: "Dressing",
        phrases: &[
            "with sleeve management",
            "with button manipulation",
            "with garment positioning",
            "with fastener management",
        ],
    },
    CatalogGroup {
        title: "General",
        phrases: &[
            "with task completion",
            "with safety awareness",
            "with environmental setup",
            "with tool manipulation",
        ],
    },
];

pub(super) const OUTCOME_CATEGORY_GROUPS: &[CatalogGroup] = &[
    CatalogGroup {
        title: "Bed Mobility",
        phrases: &[
            "Improved rolling ability",
            "Enhanced supine to sit transitions",
            "Increased independence in repositioning",
            "Improved bed mobility endurance",
            "Enhanced use of assistive devices for bed mobility",
        ],
    },
    CatalogGroup {
        title: "Upper Extremity ROM",
        phrases: &[
            "Increased shoulder flexion",
            "Improved elbow extension",
            "Enhanced wrist mobility",
            "Increased forearm supination/pronation",
            "Improved finger dexterity",
        ],
    },
    CatalogGroup {
        title: "Trunk Control",
        phrases: &[
            "Improved seated balance",
            "Enhanced core stability",
            "Increased trunk rotation",
            "Improved postural control",
            "Enhanced ability to maintain midline",
        ],
    },
    CatalogGroup {
        title: "Balance",
        phrases: &[
            "Improved static standing balance",
            "Enhanced dynamic balance",
            "Increased confidence in balance tasks",
            "Improved reactive balance strategies",
            "Enhanced balance during functional tasks",
        ],
    },
    CatalogGroup {
        title: "Activities of Daily Living",
        phrases: &[
            "Improved dressing ability",
            "Enhanced grooming efficiency",
            "Improved medication management",
            "Enhanced meal preparation skills",
            "Improved bathing independence",
        ],
    },
];

pub(super) const MEASUREMENT_UNIT_GROUPS: &[CatalogGroup] = &[
    CatalogGroup {
        title: "Distance",
        phrases: &["inches", "centimeters", "feet", "meters"],
    },
    CatalogGroup {
        title: "Time",
        phrases: &["seconds", "minutes", "hours"],
    },
    CatalogGroup {
        title: "Repetitions",
        phrases: &["reps"],
    },
    CatalogGroup {
        title: "Weight",
        phrases: &["pounds", "kilograms"],
    },
    CatalogGroup {
        title: "Percentage",
        phrases: &["%"],
    },
    CatalogGroup {
        title: "Pain Scale",
        phrases: &["out of 10"],
    },
    CatalogGroup {
        title: "Level",
        phrases: &["level"],
    },
];
