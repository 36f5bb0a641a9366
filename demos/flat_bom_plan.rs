//! 單層 BOM 計劃生成示例
//!
//! 沒有半成品的成品：展開結果只有原材料需求與成品層級工序。

use production_plan::*;
use rust_decimal::Decimal;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    println!("=== 工作桌生產計劃生成示例（單層 BOM）===\n");

    let sales_orders = MemorySalesOrderRepository::new()
        .with_order(SalesOrder::new("SO-DEMO-002").with_line("TABLE-001", Decimal::from(50)));

    let boms = MemoryBomRepository::new().with_bom(
        BomRecord::new("TABLE-001", "工作桌")
            .with_component(ComponentLine::raw_material(
                "WOOD-PANEL",
                "木板",
                Decimal::from(2),
            ))
            .with_component(ComponentLine::raw_material("LEG-SET", "桌腳組", Decimal::ONE))
            .with_operation(OperationLine::new("Sanding", "SANDING-BENCH", Decimal::from(12))),
    );

    let items = MemoryItemRepository::new()
        .with_item(ItemRecord::new("WOOD-PANEL", "木板").with_rate(Decimal::from(450)))
        .with_item(ItemRecord::new("LEG-SET", "桌腳組").with_rate(Decimal::from(800)));

    // 故意不維護 SANDING-BENCH 的時薪，示範非致命警告
    let workstations = MemoryWorkstationRepository::new();
    let store = MemoryPlanStore::new();

    let service = PlanningService::new(&sales_orders, &boms, &items, &workstations, &store);
    let result = service.generate_and_save("SO-DEMO-002", &CancelToken::new())?;

    println!("計劃編號: {}", result.plan.plan_id);
    println!("半成品數: {}", result.plan.sub_assemblies.len());
    println!("原材料總金額: {}", result.plan.total_material_amount());

    for warning in &result.warnings {
        println!("警告: [{}] {}", warning.subject, warning.message);
    }

    Ok(())
}
