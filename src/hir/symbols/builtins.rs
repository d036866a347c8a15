//! Built-in rules and actions of both quest engines.
//!
//! Order matters: lookups return the first case-insensitive match, and
//! completion lists follow table order.

use super::{InvocableSymbol, Parameter, SymbolKind, ValueType};
use crate::base::Flavor;

use ValueType::{Integer, String};

macro_rules! action {
    ($name:literal, $documentation:expr $(, $param:expr)* $(,)?) => {
        InvocableSymbol {
            kind: SymbolKind::Action,
            name: $name,
            documentation: $documentation,
            parameters: &[$($param),*],
        }
    };
}

macro_rules! rule {
    ($name:literal, $documentation:expr $(, $param:expr)* $(,)?) => {
        InvocableSymbol {
            kind: SymbolKind::Rule,
            name: $name,
            documentation: $documentation,
            parameters: &[$($param),*],
        }
    };
}

macro_rules! eoserv_stat_names {
    () => {
        "`level`, `exp`, `str`, `int`, `wis`, `agi`, `con`, `cha`, `statpoints`, \
         `skillpoints`, `admin`, `gender`, `hairstyle`, `haircolor`, `race`, `guildrank`, \
         `karma`, `class`"
    };
}

macro_rules! eoserv_rpn_stat_names {
    () => {
        "`npc`, `level`, `experience`, `hp`, `maxhp`, `tp`, `maxtp`, `maxsp`, `weight`, \
         `maxweight`, `karma`, `mindam`, `maxdam`, `damage`, `critical`, `str`, `int`, `wis`, \
         `agi`, `con`, `cha`, `base_str`, `base_int`, `base_wis`, `base_agi`, `base_con`, \
         `base_cha`, `display_str`, `display_int`, `display_wis`, `display_agi`, \
         `display_con`, `display_cha`, `accuracy`, `evade`, `armor`, `bot`, `usage`, `class`, \
         `gender`, `race`, `hairstyle`, `haircolor`, `mapid`, `x`, `y`, `direction`, \
         `sitting`, `hidden`, `whispers`, `goldbank`, `statpoints`, `skillpoints`"
    };
}

const fn param(name: &'static str, ty: ValueType, documentation: &'static str) -> Parameter {
    Parameter {
        name,
        ty,
        documentation,
        optional: false,
    }
}

const fn optional(name: &'static str, ty: ValueType, documentation: &'static str) -> Parameter {
    Parameter {
        name,
        ty,
        documentation,
        optional: true,
    }
}

/// Actions available in every flavor
pub static COMMON_ACTIONS: &[InvocableSymbol] = &[
    action!(
        "Reset",
        "Resets the quest to the `begin` state and removes the quest from the player's quest log.",
    ),
    action!(
        "ResetDaily",
        concat!(
            "Resets the quest to the `begin` state and removes the quest from the player's quest log.",
            "\n\n",
            "`ResetDaily` should be used when the player has completed a daily quest. It's used in",
            " conjunction with the `DoneDaily` rule to track how many times a player has completed",
            " the quest that day.",
        ),
    ),
    action!(
        "End",
        concat!(
            "Removes the quest from the player's quest log.",
            "\n\n",
            "`End` should be used when the player has completed the quest.",
        ),
    ),
    action!(
        "AddNpcText",
        "Adds dialogue text to a specified quest NPC, which is displayed when the NPC is clicked.",
        param("behavior_id", Integer, "The behavior ID of the quest NPC."),
        param("text", String, "The dialogue text."),
    ),
    action!(
        "AddNpcInput",
        "Adds a dialogue input to a specified quest NPC, which is displayed when the NPC is clicked.",
        param("behavior_id", Integer, "The behavior ID of the quest NPC."),
        param(
            "input_id",
            Integer,
            "The ID of the dialogue input, used in conjunction with the `InputNpc` rule.",
        ),
        param("text", String, "The dialogue input text."),
    ),
    action!(
        "ShowHint",
        "Displays a message to the player as a hint.",
        param("message", String, "The message to display to the player as a hint."),
    ),
    action!(
        "Quake",
        "Plays the quake effect on the player's current map.",
        optional("intensity", Integer, "The intensity of the quake effect. (range 1-8)"),
    ),
    action!(
        "SetMap",
        "Warps the player to the specified destination.",
        param("map", Integer, "The destination map ID."),
        param("x", Integer, "The destination X coordinate."),
        param("y", Integer, "The destination Y coordinate."),
    ),
    action!(
        "PlaySound",
        "Plays the specified sound effect for the player.",
        param(
            "sfx_id",
            Integer,
            concat!(
                "The ID of the sound effect.",
                "\n\n",
                "Corresponds to the number in the `sfx***.wav` filename in the client's `sfx` folder.",
            ),
        ),
    ),
    action!(
        "GiveExp",
        "Increases the player's experience points by a specified amount.",
        param("experience", Integer, "The number of experience points to give to the player."),
    ),
    action!(
        "GiveItem",
        "Adds an item to the player's inventory.",
        param("item_id", Integer, "The ID of the item to give to the player."),
        optional("amount", Integer, "The number of items to give to the player."),
    ),
    action!(
        "RemoveItem",
        "Removes an item from the player's inventory.",
        param("item_id", Integer, "The ID of the item to remove from the player."),
        optional("amount", Integer, "The number of items to remove from the player."),
    ),
    action!(
        "SetClass",
        "Changes the player's class.",
        param("class_id", Integer, "The ID of the player's new class."),
    ),
    action!(
        "RemoveKarma",
        "Decreases the player's karma points by a specified amount.",
        param("karma", Integer, "The number of karma points to remove from the player."),
    ),
    action!(
        "GiveKarma",
        "Increases the player's karma points by a specified amount.",
        param("karma", Integer, "The number of karma points to give to the player."),
    ),
];

pub static OFFICIAL_ACTIONS: &[InvocableSymbol] = &[action!(
    "AddNpcChat",
    "Adds chat message to a specified quest NPC, which the NPC will occasionally say.",
    param("behavior_id", Integer, "The behavior ID of the quest NPC."),
    param("chat", String, "The chat message for the NPC to say."),
)];

pub static EOSERV_ACTIONS: &[InvocableSymbol] = &[
    action!(
        "SetState",
        "Sets this quest to a new quest state.",
        param("state", String, "The name of the new quest state."),
    ),
    action!(
        "StartQuest",
        "Starts the specified quest.",
        param("quest_id", Integer, "The ID of the quest to start."),
        param("state", String, "The name of the quest state to start in."),
    ),
    action!(
        "ResetQuest",
        concat!(
            "Resets the specified quest to the `begin` state and removes the quest from the",
            " player's quest log.",
        ),
        param("quest_id", Integer, "The ID of the quest to reset."),
    ),
    action!(
        "SetQuestState",
        "Sets the specified quest to a new quest state.",
        param("quest_id", Integer, "The ID of the quest to set to a new quest state."),
        param("state", String, "The name of the new quest state."),
    ),
    action!(
        "AddNpcChat",
        concat!(
            "**Note:** `AddNpcChat` is not implemented in EOSERV.",
            "\n\n",
            "Adds chat message to a specified quest NPC, which the NPC will occasionally say.",
        ),
        param("behavior_id", Integer, "The behavior ID of the quest NPC."),
        param("chat", String, "The chat message for the NPC to say."),
    ),
    action!(
        "QuakeWorld",
        "Plays the quake effect on every map in the game world.",
        optional("intensity", Integer, "The intensity of the quake effect. (range 1-8)"),
    ),
    action!(
        "SetCoord",
        concat!(
            "Warps the player to the specified destination.",
            "\n\n",
            "An alias to the `SetMap` action.",
        ),
        param("map", Integer, "The destination map ID."),
        param("x", Integer, "The destination X coordinate."),
        param("y", Integer, "The destination Y coordinate."),
    ),
    action!(
        "SetRace",
        "Changes the player's race.",
        param("race_id", Integer, "The ID of the player's new race."),
    ),
    action!(
        "SetTitle",
        "Changes the player's title.",
        param("title", String, "The player's new title."),
    ),
    action!(
        "SetFiance",
        "Changes the player's fiance.",
        param("fiance", String, "The name of the player's new fiance."),
    ),
    action!(
        "SetPartner",
        "Changes the player's partner.",
        param("partner", String, "The name of the player's new partner."),
    ),
    action!(
        "SetHome",
        "Changes the player's home.",
        param("home", String, "The name of the player's new home."),
    ),
    action!(
        "SetStat",
        "Changes the specified player stat to a new value.",
        param(
            "stat",
            String,
            concat!("The name of the stat to modify. Options are: ", eoserv_stat_names!()),
        ),
        param("value", String, "The new value of the stat."),
    ),
    action!(
        "GiveStat",
        "Increases the specified player stat by a specified amount.",
        param(
            "stat",
            String,
            concat!("The name of the stat to increase. Options are: ", eoserv_stat_names!()),
        ),
        param("amount", Integer, "The amount to increase the stat by."),
    ),
    action!(
        "RemoveStat",
        "Decreases the specified player stat by a specified amount.",
        param(
            "stat",
            String,
            concat!("The name of the stat to decrease. Options are: ", eoserv_stat_names!()),
        ),
        param("amount", Integer, "The amount to decrease the stat by."),
    ),
    action!(
        "Roll",
        concat!(
            "Generates a random number between 1 and a specified maximum (inclusive), used in",
            " conjunction with the `Rolled` rule.",
        ),
        param("max", Integer, "The largest number that can be rolled."),
    ),
];

/// Rules available in every flavor
pub static COMMON_RULES: &[InvocableSymbol] = &[
    rule!(
        "InputNpc",
        concat!(
            "Triggered when the player clicks a quest input with the specified `input_id`.",
            "\n\n",
            "Used in conjunction with the `AddNpcInput` action.",
        ),
        param("input_id", Integer, "The ID of the dialogue input."),
    ),
    rule!(
        "TalkedToNpc",
        concat!(
            "Triggered after the player talks to a quest NPC with the specified `behavior_id`.",
            "\n\n",
            "Used in conjunction with the `AddNpcText` action.",
        ),
        param("behavior_id", Integer, "The behavior ID of the quest NPC."),
    ),
    rule!(
        "Always",
        "Triggered unconditionally after the quest state's actions are completed.",
    ),
    rule!(
        "DoneDaily",
        concat!(
            "Triggered if the player has completed the quest a specified number of times within the",
            " last day.\n\n",
            "Used in conjunction with the `ResetDaily` action.",
        ),
        param(
            "completions",
            Integer,
            "The number of times that the player must complete the quest within a day.",
        ),
    ),
    rule!(
        "EnterMap",
        "Triggered when the player enters the specified map.",
        param("map", Integer, "The ID of the map that must be entered."),
    ),
    rule!(
        "EnterCoord",
        "Triggered when the player enters the specified map coordinates.",
        param("map", Integer, "The ID of the map containing the specified coordinates."),
        param("x", Integer, "The X coordinate that must be entered."),
        param("y", Integer, "The Y coordinate that must be entered."),
    ),
    rule!(
        "LeaveMap",
        "Triggered when the player leaves the specified map.",
        param("map", Integer, "The ID of the map that must be left."),
    ),
    rule!(
        "LeaveCoord",
        "Triggered when the player leaves the specified map coordinates.",
        param("map", Integer, "The ID of the map containing the specified coordinates."),
        param("x", Integer, "The X coordinate that must be left."),
        param("y", Integer, "The Y coordinate that must be left."),
    ),
    rule!(
        "KilledNpcs",
        "Triggered when the player kills a specified NPC.",
        param("npc_id", Integer, "The ID of the NPC that must be killed."),
        optional("amount", Integer, "The number of NPCs that must be killed."),
    ),
    rule!(
        "KilledPlayers",
        "Triggered when the player kills a player.",
        param("amount", Integer, "The number of players that must be killed."),
    ),
    rule!(
        "GotItems",
        "Triggered when a specified item is in the player's inventory.",
        param("item_id", Integer, "The ID of the item that must be in the player's inventory."),
        optional(
            "amount",
            Integer,
            "The amount of the item that must be in the player's inventory.",
        ),
    ),
    rule!(
        "LostItems",
        "Triggered when a specified item is not in the player's inventory.",
        param(
            "item_id",
            Integer,
            "The ID of the item that must not be in the player's inventory.",
        ),
        optional(
            "amount",
            Integer,
            "The amount of the item that must not be in the player's inventory.",
        ),
    ),
];

pub static OFFICIAL_RULES: &[InvocableSymbol] = &[];

pub static EOSERV_RULES: &[InvocableSymbol] = &[
    rule!(
        "UsedItem",
        "Triggered when a specified item is used.",
        param("item_id", Integer, "The ID of the item that must be used."),
        optional("amount", Integer, "The number of times that the item must be used"),
    ),
    rule!(
        "IsGender",
        "Triggered if the player is the specified gender.",
        param(
            "gender_id",
            Integer,
            concat!(
                "The ID of the gender that the player must be.",
                "\n\n",
                "`0`: Female\n",
                "`1`: Male",
            ),
        ),
    ),
    rule!(
        "IsClass",
        "Triggered if the player is the specified class.",
        param("class_id", Integer, "The ID of the class that the player must be."),
    ),
    rule!(
        "IsRace",
        "Triggered if the player is the specified race.",
        param("race_id", Integer, "The ID of the race that the player must be."),
    ),
    rule!(
        "IsWearing",
        "Triggered if the player has the specified item equipped.",
        param("item_id", Integer, "The ID of the item that the player must be wearing."),
    ),
    rule!(
        "GotSpell",
        "Triggered when a specified spell is known by the player.",
        param("spell_id", Integer, "The ID of the spell that must be known by the player."),
        optional("spell_level", Integer, "The spell level requirement that must be met."),
    ),
    rule!(
        "LostSpell",
        "Triggered when a specified spell is not known by the player.",
        param(
            "spell_id",
            Integer,
            "The ID of the spell that must not be known by the player.",
        ),
    ),
    rule!(
        "UsedSpell",
        "Triggered when a specified spell is used.",
        param("spell_id", Integer, "The ID of the spell that must be used."),
        optional("amount", Integer, "The number of times that the spell must be used."),
    ),
    rule!(
        "CitizenOf",
        "Triggered if the player is a citizen of the specified home.",
        param(
            "home",
            String,
            "The name of the home that the player must be a citizen of.",
        ),
    ),
    rule!(
        "Rolled",
        "Triggered when the `Roll` action generates the specified value.",
        param("value", Integer, "The value that the `Roll` action must generate."),
    ),
    rule!(
        "StatIs",
        "Triggered when the specified player stat is the specified value.",
        param(
            "stat",
            String,
            concat!("The name of the stat. Options are: ", eoserv_rpn_stat_names!()),
        ),
        param("value", Integer, "The value that the specified stat must be."),
    ),
    rule!(
        "StatNot",
        "Triggered when the specified player stat is not the specified value.",
        param(
            "stat",
            String,
            concat!("The name of the stat. Options are: ", eoserv_rpn_stat_names!()),
        ),
        param("value", Integer, "The value that the specified stat must not be."),
    ),
    rule!(
        "StatGreater",
        "Triggered when the specified player stat is greater than the specified value.",
        param(
            "stat",
            String,
            concat!("The name of the stat. Options are: ", eoserv_rpn_stat_names!()),
        ),
        param("value", Integer, "The value that the specified stat must be greater than."),
    ),
    rule!(
        "StatLess",
        "Triggered when the specified player stat is less than the specified value.",
        param(
            "stat",
            String,
            concat!("The name of the stat. Options are: ", eoserv_rpn_stat_names!()),
        ),
        param("value", Integer, "The value that the specified stat must be less than."),
    ),
    rule!(
        "StatBetween",
        "Triggered when the specified player stat is between the specified values (inclusive).",
        param(
            "stat",
            String,
            concat!("The name of the stat. Options are: ", eoserv_rpn_stat_names!()),
        ),
        param(
            "min",
            Integer,
            "The value that the specified stat must be greater than or equal to.",
        ),
        param(
            "max",
            Integer,
            "The value that the specified stat must be less than or equal to.",
        ),
    ),
    rule!(
        "StatRpn",
        "Triggered when the specified rpn expression evaluates to true.",
        param(
            "expression",
            String,
            concat!(
                "An expression in ",
                "[Reverse Polish notation](https://en.wikipedia.org/wiki/Reverse_Polish_notation)",
                " that must evaluate to true.",
                "\n\n",
                "Player stats may be referenced in the expression.\n",
                " Options are: ",
                eoserv_rpn_stat_names!(),
            ),
        ),
    ),
];

/// Actions of `flavor`, common ones first
pub fn actions(flavor: Flavor) -> impl Iterator<Item = &'static InvocableSymbol> {
    let specific = match flavor {
        Flavor::Official => OFFICIAL_ACTIONS,
        Flavor::Eoserv => EOSERV_ACTIONS,
    };
    COMMON_ACTIONS.iter().chain(specific)
}

/// Rules of `flavor`, common ones first
pub fn rules(flavor: Flavor) -> impl Iterator<Item = &'static InvocableSymbol> {
    let specific = match flavor {
        Flavor::Official => OFFICIAL_RULES,
        Flavor::Eoserv => EOSERV_RULES,
    };
    COMMON_RULES.iter().chain(specific)
}
