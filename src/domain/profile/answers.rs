//! Closed answer sets for every questionnaire step.

answer_set! {
    /// The personal goal chosen on the first step.
    Objective {
        LoseWeight => "lose_weight",
        GainWeight => "gain_weight",
        MaintainWeight => "maintain_weight",
        ImproveEnergy => "improve_energy",
        ManageStress => "manage_stress",
        SportsPerformance => "sports_performance",
        SleepBetter => "sleep_better",
        HealthSupport => "health_support",
        BetterFoodRelationship => "better_food_relationship",
    }
}

answer_set! {
    Sex {
        Male => "male",
        Female => "female",
    }
}

answer_set! {
    /// Day-to-day activity level.
    ActivityLevel {
        Sedentary => "sedentary",
        LightlyActive => "lightly_active",
        ModeratelyActive => "moderately_active",
        VeryActive => "very_active",
        PhysicalWork => "physical_work",
    }
}

answer_set! {
    /// Health situations; `NoCondition` is the exclusive "none" answer.
    HealthCondition {
        Diabetes => "diabetes",
        Hypertension => "hypertension",
        Cholesterol => "cholesterol",
        DigestiveDisorders => "digestive_disorders",
        StressAnxiety => "stress_anxiety",
        ChronicFatigue => "chronic_fatigue",
        SleepDisorders => "sleep_disorders",
        MildDepression => "mild_depression",
        MenstrualDisorders => "menstrual_disorders",
        NoCondition => "none",
    }
}

impl HealthCondition {
    /// Returns true for the "none" answer, which excludes every other one.
    pub fn is_sentinel(&self) -> bool {
        matches!(self, HealthCondition::NoCondition)
    }
}

answer_set! {
    /// Meals per day; 4 and above share one answer.
    MealCount {
        One => "1",
        Two => "2",
        Three => "3",
        FourOrMore => "4",
    }
}

answer_set! {
    SnackingFrequency {
        Never => "never",
        Rarely => "rarely",
        Often => "often",
        Always => "always",
    }
}

answer_set! {
    SweetenedDrinks {
        Never => "never",
        OnceADay => "once_a_day",
        TwiceOrMore => "twice_or_more",
    }
}

answer_set! {
    /// Water drunk per day.
    WaterIntake {
        UnderOneLitre => "under_1l",
        OneToTwoLitres => "1_to_2l",
        OverTwoLitres => "over_2l",
    }
}

answer_set! {
    /// Vegetable portions per day.
    VegetablePortions {
        UpToTwo => "up_to_2",
        ThreeToFour => "3_to_4",
        FiveOrMore => "5_plus",
    }
}

answer_set! {
    CookingMethod {
        Fried => "fried",
        Steamed => "steamed",
        Raw => "raw",
        Mixed => "mixed",
    }
}

answer_set! {
    ProcessedFood {
        Rarely => "rarely",
        Regularly => "regularly",
        Daily => "daily",
    }
}

answer_set! {
    Motivation {
        FeelBetterInBody => "feel_better_in_body",
        MoreEnergy => "more_energy",
        MoreConfident => "more_confident",
        BeSupported => "be_supported",
        TakeOnChallenge => "take_on_challenge",
    }
}

answer_set! {
    Barrier {
        LackOfMotivation => "lack_of_motivation",
        DiscouragingEntourage => "discouraging_entourage",
        LackOfTime => "lack_of_time",
        FinancialDifficulty => "financial_difficulty",
        GiveUpQuickly => "give_up_quickly",
    }
}

answer_set! {
    /// Physical activities the user enjoys; `Other` unlocks a free-text qualifier.
    Activity {
        BriskWalking => "brisk_walking",
        WeightTraining => "weight_training",
        YogaRelaxation => "yoga_relaxation",
        TeamSports => "team_sports",
        Dance => "dance",
        Cycling => "cycling",
        Swimming => "swimming",
        CombatSports => "combat_sports",
        HikingOutdoor => "hiking_outdoor",
        ExtremeSports => "extreme_sports",
        FamilyActivity => "family_activity",
        AppVideoWorkouts => "app_video_workouts",
        Other => "other",
    }
}
