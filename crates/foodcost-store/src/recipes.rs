//! 食譜集合

use foodcost_core::{FoodCostError, Recipe, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 食譜集合
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    /// 創建空集合
    pub fn new() -> Self {
        Self::default()
    }

    /// 全部食譜（插入順序）
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// 依ID查詢食譜
    pub fn find(&self, id: Uuid) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// 新增或覆蓋同ID的食譜（編輯端每次送回整份食譜）
    pub fn upsert(&mut self, recipe: Recipe) {
        match self.recipes.iter_mut().find(|r| r.id == recipe.id) {
            Some(existing) => *existing = recipe,
            None => self.recipes.push(recipe),
        }
    }

    /// 移除食譜
    pub fn remove(&mut self, id: Uuid) -> Result<()> {
        let before = self.recipes.len();
        self.recipes.retain(|r| r.id != id);
        if self.recipes.len() == before {
            return Err(FoodCostError::RecipeNotFound(id));
        }
        Ok(())
    }

    /// 清除所有引用指定原料的原料行；被清空的食譜一併移除
    ///
    /// 回傳（清除的原料行數、移除的食譜數）。
    pub fn purge_ingredient(&mut self, master_ingredient_id: Uuid) -> (usize, usize) {
        let mut stripped_lines = 0;
        for recipe in &mut self.recipes {
            let before = recipe.ingredients.len();
            recipe
                .ingredients
                .retain(|line| line.master_ingredient_id != master_ingredient_id);
            stripped_lines += before - recipe.ingredients.len();
        }

        let before = self.recipes.len();
        self.recipes.retain(|recipe| !recipe.ingredients.is_empty());
        (stripped_lines, before - self.recipes.len())
    }
}
