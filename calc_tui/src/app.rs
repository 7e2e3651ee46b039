//! Application state

use calc_core::{Calculator, Field};

/// Form rows in display order: the attacker card first, then the enemy card
pub const FORM_FIELDS: [Field; 10] = [
    Field::CharacterLevel,
    Field::ScalingAttribute,
    Field::CritRate,
    Field::CritDamage,
    Field::SkillMultiplier,
    Field::DamageBuff,
    Field::EnemyLevel,
    Field::DefDebuff,
    Field::Res,
    Field::Broken,
];

/// Index of the first enemy-card row in `FORM_FIELDS`
pub const ENEMY_SECTION_START: usize = 6;

pub struct App {
    pub calc: Calculator,
    pub selected: usize,
    pub input: String,
    pub editing: bool,
}

impl App {
    pub fn new(calc: Calculator) -> Self {
        App {
            calc,
            selected: 0,
            input: String::new(),
            editing: false,
        }
    }

    pub fn selected_field(&self) -> Field {
        FORM_FIELDS[self.selected]
    }

    /// Display label for a form row
    pub fn field_label(field: Field) -> &'static str {
        match field {
            Field::CharacterLevel => "Attacker Lv",
            Field::EnemyLevel => "Enemy Lv",
            Field::ScalingAttribute => "ATK",
            Field::SkillMultiplier => "Skill Multiplier",
            Field::CritRate => "Crit Rate",
            Field::CritDamage => "Crit DMG",
            Field::DamageBuff => "Damage Buff",
            Field::DefDebuff => "DEF Debuff",
            Field::Res => "RES",
            Field::Broken => "Weakness Broken",
        }
    }

    /// Unit suffix shown after a row's value ("%" for percentage fields)
    pub fn field_suffix(field: Field) -> &'static str {
        match field {
            Field::SkillMultiplier
            | Field::CritRate
            | Field::CritDamage
            | Field::DamageBuff
            | Field::DefDebuff
            | Field::Res => "%",
            _ => "",
        }
    }

    /// The text shown in a row: the edit buffer while editing, the current
    /// parameter value otherwise
    pub fn display_value(&self, field: Field) -> String {
        if self.editing && field == self.selected_field() {
            return self.input.clone();
        }
        match self.calc.params().numeric(field) {
            // Shortest-roundtrip float display: "2000", "62.5"
            Some(value) => format!("{value}"),
            None => String::new(), // broken renders as a checkbox
        }
    }

    pub fn on_up(&mut self) {
        self.cancel();
        self.selected = self.selected.checked_sub(1).unwrap_or(FORM_FIELDS.len() - 1);
    }

    pub fn on_down(&mut self) {
        self.cancel();
        self.selected = (self.selected + 1) % FORM_FIELDS.len();
    }

    /// Enter either toggles the broken flag or begins/commits an edit
    pub fn on_enter(&mut self) {
        if self.editing {
            self.commit();
        } else if self.selected_field() == Field::Broken {
            self.toggle_broken();
        } else {
            self.begin_edit();
        }
    }

    pub fn on_space(&mut self) {
        if !self.editing && self.selected_field() == Field::Broken {
            self.toggle_broken();
        }
    }

    /// Seed the edit buffer with the current value
    pub fn begin_edit(&mut self) {
        if self.selected_field().is_numeric() {
            self.input = self.display_value(self.selected_field());
            self.editing = true;
        }
    }

    /// Start an edit with an empty buffer (type-to-replace)
    pub fn begin_edit_blank(&mut self) {
        if self.selected_field().is_numeric() {
            self.input.clear();
            self.editing = true;
        }
    }

    pub fn on_char(&mut self, c: char) {
        if self.editing {
            self.input.push(c);
        }
    }

    pub fn on_backspace(&mut self) {
        if self.editing {
            self.input.pop();
        }
    }

    /// Submit the edit buffer; a rejected edit simply leaves the previous
    /// value in place
    pub fn commit(&mut self) {
        if self.editing {
            let field = self.selected_field();
            self.calc.set_text(field, &self.input);
            self.editing = false;
            self.input.clear();
        }
    }

    pub fn cancel(&mut self) {
        self.editing = false;
        self.input.clear();
    }

    pub fn toggle_broken(&mut self) {
        let on = !self.calc.params().broken;
        self.calc.set_flag(Field::Broken, on);
    }

    pub fn reset(&mut self) {
        self.cancel();
        self.calc.reset();
    }
}
